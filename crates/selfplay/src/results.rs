//! Match results storage and reporting

use std::path::Path;

use anyhow::Context;
use chess_core::{Color, GameStatus};
use serde::{Deserialize, Serialize};

/// How a single game ended, from the board's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    /// Ply cap reached, or a side had no move to offer
    Unfinished,
}

impl Outcome {
    pub fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Checkmate {
                winner: Color::White,
            } => Outcome::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Outcome::BlackWins,
            GameStatus::Stalemate | GameStatus::FiftyMoveRule | GameStatus::ThreefoldRepetition => {
                Outcome::Draw
            }
            GameStatus::Ongoing | GameStatus::Quit => Outcome::Unfinished,
        }
    }

    /// Result in the usual `1-0` notation.
    pub fn notation(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unfinished => "*",
        }
    }
}

/// Everything worth keeping about one game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub status: GameStatus,
    pub plies: u32,
    pub white_score: u32,
    pub black_score: u32,
    /// Moves in coordinate form, e.g. `e2e4`
    pub moves: Vec<String>,
    pub final_fen: String,
}

/// Totals and per-game records of a match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub white: String,
    pub black: String,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(white: &str, black: &str) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            ..Default::default()
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        match record.outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Unfinished => self.unfinished += 1,
        }
        self.games.push(record);
    }

    pub fn total_games(&self) -> u32 {
        self.games.len() as u32
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize results")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n\n", self.white, self.black));
        report.push_str(&format!(
            "{:<6} {:<10} {:>6} {:>7}  {}\n",
            "Game", "Result", "Plies", "Score", "Ending"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:<10} {:>6} {:>3}-{:<3}  {}\n",
                i + 1,
                game.outcome.notation(),
                game.plies,
                game.white_score,
                game.black_score,
                game.status
            ));
        }

        report.push_str(&format!(
            "\nWhite wins: {}, Black wins: {}, Draws: {}, Unfinished: {}\n",
            self.white_wins, self.black_wins, self.draws, self.unfinished
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
