//! Neno - CLI
//!
//! Daily Swahili word puzzle in the terminal, with an unlimited practice mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use neno::{
    commands::{GameContext, run_play, run_share, run_stats},
    game::{GameConfig, GameMode, SystemClock},
    persistence::FileStore,
    wordlists::{Dictionary, loader::load_from_file},
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "neno",
    about = "Guess the five-letter Swahili word of the day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (default: built-in Swahili list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory holding saved progress and statistics
    #[arg(short = 'd', long, global = true, default_value = ".neno")]
    data_dir: PathBuf,

    /// Last line of the share text; empty to omit
    #[arg(long, global = true, default_value = "#Neno")]
    share_reference: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle (default)
    Play {
        /// Skip the daily puzzle and play random words
        #[arg(short, long)]
        unlimited: bool,
    },

    /// Print the share grid for today's puzzle
    Share,

    /// Show lifetime statistics
    Stats,
}

/// Load the dictionary from `path`, or the embedded list when absent
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            Dictionary::new(words)
                .with_context(|| format!("Word list {} is not usable", path.display()))
        }
        None => Dictionary::embedded().context("Embedded word list is not usable"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    log::info!(
        "Loaded {} words of length {}",
        dictionary.len(),
        dictionary.word_length()
    );

    let config = GameConfig {
        word_length: dictionary.word_length(),
        share_reference: cli.share_reference,
        ..GameConfig::default()
    };
    let store = FileStore::new(cli.data_dir);
    let clock = SystemClock;
    let ctx = GameContext {
        config,
        dictionary: &dictionary,
        store: &store,
        clock: &clock,
    };

    let mut out = io::stdout().lock();
    match cli.command.unwrap_or(Commands::Play { unlimited: false }) {
        Commands::Play { unlimited } => {
            let mode = if unlimited {
                GameMode::Unlimited
            } else {
                GameMode::Daily
            };
            run_play(&ctx, mode, &mut io::stdin().lock(), &mut out)
        }
        Commands::Share => run_share(&ctx, &mut out),
        Commands::Stats => run_stats(&ctx, &mut out),
    }
}
