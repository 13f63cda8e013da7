use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tilesearch_core::{SearchConfig, SearchOutcome};
use tilesearch_puzzle::{
    Benchmark, BenchmarkConfig, Board, EightPuzzle, Heuristic, IdentityScheme,
};

/// Print an error and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        log::error!($($arg)*);
        std::process::exit($code)
    }};
}

mod commands;
use commands::*;

/// A* search benchmarks on the 8-puzzle.
#[derive(Parser, Debug)]
#[command(name = "tilesearch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cli.command.run();
}
