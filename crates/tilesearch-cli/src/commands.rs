use super::*;

mod bench;
pub use bench::*;

mod solve;
pub use solve::*;

mod list;
pub use list::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Solve random solvable starts with each heuristic and compare node counts.
    #[command(alias = "b")]
    Bench(Bench),

    /// Solve a single start board.
    #[command(alias = "s")]
    Solve(Solve),

    /// Print the available heuristics and identity schemes.
    Heuristics,
}

#[derive(clap::Args, Debug)]
pub struct Bench {
    /// YAML benchmark config. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of random start boards.
    #[arg(short, long)]
    puzzles: Option<usize>,
    /// Worker threads; 0 solves everything on the main thread.
    #[arg(short, long)]
    workers: Option<usize>,
    /// Seed for the start board generator.
    #[arg(long)]
    seed: Option<u64>,
    /// Heuristic to benchmark, by name or h1..h4. Repeat to compare several.
    #[arg(short = 'H', long = "heuristic")]
    heuristics: Vec<String>,
    /// How states are keyed in the open and closed sets.
    #[arg(short, long)]
    identity: Option<String>,
    /// Stop each search after this many expansions.
    #[arg(short, long)]
    max_expansions: Option<u64>,
    /// Print the report as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Solve {
    /// Start board as nine digits, row-major, 0 for the blank (e.g. 1,2,3,4,0,6,7,5,8).
    tiles: String,
    /// Heuristic by name or h1..h4.
    #[arg(short = 'H', long, default_value = "manhattan")]
    heuristic: String,
    /// How states are keyed in the open and closed sets.
    #[arg(short, long, default_value = "with_path_cost")]
    identity: String,
    /// Stop after this many expansions.
    #[arg(short, long)]
    max_expansions: Option<u64>,
    /// Print the outcome as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Bench(args) => args.run(),
            Command::Solve(args) => args.run(),
            Command::Heuristics => list_heuristics(),
        }
    }
}
