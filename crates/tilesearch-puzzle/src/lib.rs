mod board;
mod config;
mod domain;
mod error;
mod generator;
mod harness;
mod heuristics;
mod identity;
mod moves;
mod report;
mod solvability;

pub use board::{Board, CELLS, PuzzleState, SIDE};
pub use config::BenchmarkConfig;
pub use domain::EightPuzzle;
pub use error::PuzzleError;
pub use generator::PuzzleGenerator;
pub use harness::{Benchmark, Job, JobResult, WorkItem};
pub use heuristics::{Heuristic, direct_reversals, manhattan_distance, misplaced_tiles};
pub use identity::{IdentityScheme, arrangement_code};
pub use moves::successors;
pub use report::{BenchmarkReport, HeuristicSummary};
pub use solvability::{inversion_count, is_solvable};
