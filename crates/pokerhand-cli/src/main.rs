//! `pokerhand` — judge five-card poker hands from the command line.
//!
//! Logging goes to stderr and respects `RUST_LOG` (default `warn`).
//! `POKERHAND_SEED` fixes the shuffle for `deal` when `--seed` is absent.

mod commands;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use render::Format;

#[derive(Parser)]
#[command(name = "pokerhand")]
#[command(about = "Rank and compare five-card poker hands", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Name for the first hand
    #[arg(long, default_value = "Black", global = true)]
    black: String,

    /// Name for the second hand
    #[arg(long, default_value = "White", global = true)]
    white: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two hands, e.g. `compare "2H 3D 5S 9C KD" "2C 3H 4S 8C AH"`
    Compare { first: String, second: String },

    /// Print the category of one hand
    Classify { hand: String },

    /// Judge `Black: ... White: ...` lines from a file or stdin
    Judge {
        /// Read from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Deal two hands from a shuffled deck and judge them
    Deal {
        /// Shuffle seed (falls back to POKERHAND_SEED, then the OS)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Options shared by every command.
struct Config {
    format: Format,
    black: String,
    white: String,
}

fn main() -> ExitCode {
    // Initialise tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config {
        format: cli.format,
        black: cli.black,
        white: cli.white,
    };

    let result = match cli.command {
        Command::Compare { first, second } => commands::compare(&config, &first, &second),
        Command::Classify { hand } => commands::classify(&config, &hand),
        Command::Judge { input } => commands::judge(&config, input.as_deref()),
        Command::Deal { seed } => {
            commands::resolve_seed(seed, std::env::var(commands::SEED_VAR).ok())
                .and_then(|seed| commands::deal(&config, seed))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
