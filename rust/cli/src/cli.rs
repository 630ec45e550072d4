use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Texas Hold'em ring game in the terminal.
#[derive(Debug, Parser)]
#[command(name = "ringgame", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against heuristic opponents
    Play(PlayOpts),
    /// Deal a single hand face up for inspection
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats to deal to (2-10)
        #[arg(long, default_value_t = 4)]
        players: usize,
    },
}

#[derive(Debug, Args)]
pub struct PlayOpts {
    /// Number of AI opponents at the table
    #[arg(long)]
    pub opponents: Option<usize>,
    /// Big blind size for the first rounds
    #[arg(long)]
    pub blind: Option<u32>,
    /// Chips every seat starts with
    #[arg(long)]
    pub buy_in: Option<u32>,
    /// RNG seed for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
    /// Display name for the human seat
    #[arg(long)]
    pub name: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Append JSONL round records to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
    /// Stop after this many rounds instead of asking to continue
    #[arg(long)]
    pub rounds: Option<u32>,
}
