//! A game between two players: the board, who is playing, the score and
//! whether the game has ended.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Promotion};
use crate::endgame::{self, GameStatus};
use crate::error::{CoreError, CoreResult};
use crate::movegen::legal_moves;
use crate::record::MoveRecord;
use crate::types::{Color, Move, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    /// `difficulty` is the search depth in plies; a random bot ignores it.
    Bot { difficulty: u8, random: bool },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Value of captured pieces, plus the king's value for a checkmate.
    pub score: u32,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            score: 0,
            kind: PlayerKind::Human,
        }
    }

    pub fn bot(name: impl Into<String>, difficulty: u8, random: bool) -> Self {
        Player {
            name: name.into(),
            score: 0,
            kind: PlayerKind::Bot { difficulty, random },
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Bot { .. })
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    status: GameStatus,
}

impl Game {
    pub fn new(white: Player, black: Player) -> Self {
        Game {
            board: Board::startpos(),
            white,
            black,
            status: GameStatus::Ongoing,
        }
    }

    /// Start over from the initial position with both scores cleared.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.white.reset();
        self.black.reset();
        self.status = GameStatus::Ongoing;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for engines; they must hand the board back unchanged.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.board.turn())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    /// Commits a move for the side to move and returns the resulting status.
    ///
    /// The move must be in the legal set; anything else, including a move
    /// whose source and destination coincide, is rejected without touching
    /// the game.
    pub fn play(&mut self, mv: Move, promotion: Promotion<'_>) -> CoreResult<GameStatus> {
        if self.status.is_over() {
            return Err(CoreError::GameOver {
                status: self.status,
            });
        }
        if mv.from == mv.to || !self.legal_moves().contains(&mv) {
            return Err(CoreError::IllegalMove { mv });
        }

        let record = self.board.make_move(mv, promotion);
        let mover = record.color();
        self.player_mut(mover).score += record.captured().value();
        debug!(ply = self.board.history().len(), %mover, "{record}");

        self.status = endgame::status(&self.board);
        if let Some(winner) = self.status.winner() {
            self.player_mut(winner).score += PieceKind::King.value();
        }
        if self.status.is_over() {
            info!(
                status = %self.status,
                plies = self.board.history().len(),
                white = self.white.score,
                black = self.black.score,
                "game over"
            );
        }
        Ok(self.status)
    }

    /// Reverts the last committed move together with its effect on the
    /// scores. The game is in progress again afterwards.
    pub fn take_back(&mut self) -> Option<MoveRecord> {
        let record = self.board.unmake_move()?;
        if let Some(winner) = self.status.winner() {
            let player = self.player_mut(winner);
            player.score = player.score.saturating_sub(PieceKind::King.value());
        }
        let player = self.player_mut(record.color());
        player.score = player.score.saturating_sub(record.captured().value());
        self.status = GameStatus::Ongoing;
        debug!(ply = self.board.history().len() + 1, "took back {record}");
        Some(record)
    }

    pub fn quit(&mut self) -> GameStatus {
        self.status = GameStatus::Quit;
        info!(plies = self.board.history().len(), "game abandoned");
        self.status
    }

    /// Committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        self.board.history()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
