//! Self-play CLI
//!
//! Plays bot-vs-bot games and writes the results as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use selfplay::{MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Play chess bots against each other")]
struct Cli {
    /// TOML file with match settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long)]
    games: Option<u32>,

    /// Plies after which a game is abandoned
    #[arg(long)]
    max_plies: Option<u32>,

    /// Search depth of the white bot
    #[arg(long)]
    white_depth: Option<u8>,

    /// Search depth of the black bot
    #[arg(long)]
    black_depth: Option<u8>,

    /// White plays random moves
    #[arg(long)]
    white_random: bool,

    /// Black plays random moves
    #[arg(long)]
    black_random: bool,

    /// Where to write the JSON results
    #[arg(long, default_value = "selfplay_results.json")]
    output: PathBuf,
}

impl Cli {
    fn apply(&self, config: &mut MatchConfig) {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(depth) = self.white_depth {
            config.white.difficulty = depth;
        }
        if let Some(depth) = self.black_depth {
            config.black.difficulty = depth;
        }
        config.white.random |= self.white_random;
        config.black.random |= self.black_random;
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    cli.apply(&mut config);

    info!(
        games = config.games,
        max_plies = config.max_plies,
        white = %config.white.name,
        black = %config.black.name,
        "starting match"
    );

    let result = MatchRunner::new(config).run();
    result.print_report();
    result
        .save(&cli.output)
        .with_context(|| format!("Could not save results to {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "results saved");
    Ok(())
}
