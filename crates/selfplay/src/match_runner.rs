//! Match runner for playing games between bots

use chess_core::{Color, Engine, Game, GameStatus, Player};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use tracing::{debug, info, warn};

use crate::config::{BotConfig, MatchConfig};
use crate::results::{GameRecord, MatchResult, Outcome};

/// The engine a bot configuration asks for.
pub fn create_engine(bot: &BotConfig) -> Box<dyn Engine> {
    if bot.random {
        Box::new(RandomEngine::new())
    } else {
        Box::new(ClassicalEngine::new())
    }
}

fn player(bot: &BotConfig) -> Player {
    Player::bot(bot.name.clone(), bot.difficulty, bot.random)
}

/// Runs matches between two bots
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every configured game with the configured engines.
    pub fn run(&self) -> MatchResult {
        let mut white = create_engine(&self.config.white);
        let mut black = create_engine(&self.config.black);
        self.run_match(white.as_mut(), black.as_mut())
    }

    /// Play every configured game between two given engines, `white` always
    /// taking the white pieces.
    pub fn run_match(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new(&self.config.white.name, &self.config.black.name);
        let mut game = Game::new(player(&self.config.white), player(&self.config.black));

        for game_num in 0..self.config.games {
            game.reset();
            let record = self.play_game(&mut game, white, black);
            info!(
                game = game_num + 1,
                of = self.config.games,
                result = record.outcome.notation(),
                plies = record.plies,
                ending = %record.status,
                "game finished"
            );
            result.add_game(record);
        }

        info!(
            white_wins = result.white_wins,
            black_wins = result.black_wins,
            draws = result.draws,
            unfinished = result.unfinished,
            "match finished"
        );
        result
    }

    /// Play a single game from the starting position
    fn play_game<'a>(
        &self,
        game: &mut Game,
        white: &'a mut dyn Engine,
        black: &'a mut dyn Engine,
    ) -> GameRecord {
        white.new_game();
        black.new_game();

        let mut moves = Vec::new();
        let mut status = GameStatus::Ongoing;

        while (moves.len() as u32) < self.config.max_plies {
            let turn = game.board().turn();
            let (engine, bot) = match turn {
                Color::White => (&mut *white, &self.config.white),
                Color::Black => (&mut *black, &self.config.black),
            };

            let search = engine.search(game.board_mut(), bot.difficulty);
            let Some(mv) = search.best_move else {
                warn!(%turn, "engine returned no move in an ongoing game");
                break;
            };
            debug!(%turn, %mv, score = search.score, nodes = search.nodes, "bot move");

            match game.play(mv, engine.promotion()) {
                Ok(next) => {
                    moves.push(mv.to_string());
                    status = next;
                }
                Err(err) => {
                    warn!(%turn, %mv, %err, "engine move rejected");
                    break;
                }
            }
            if status.is_over() {
                break;
            }
        }

        GameRecord {
            outcome: Outcome::from_status(status),
            status,
            plies: moves.len() as u32,
            white_score: game.player(Color::White).score,
            black_score: game.player(Color::Black).score,
            moves,
            final_fen: game.board().fen(),
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
