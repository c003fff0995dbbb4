//! Self-play runner for the chess bots
//!
//! This crate provides infrastructure for:
//! - Playing configured bot-vs-bot games without a terminal
//! - Collecting per-game records and match totals
//! - Saving the results as JSON
//!
//! # Usage
//!
//! ```bash
//! # Ten games, search bot at depth 3 against the random bot
//! cargo run -p selfplay -- --games 10 --white-depth 3 --black-random
//!
//! # Settings from a file, results written next to it
//! cargo run -p selfplay -- --config selfplay.toml --output results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
