use std::fmt;

use serde::Serialize;
use tilesearch_core::SearchOutcome;

use crate::{Heuristic, JobResult, PuzzleError};

/// Aggregate of every run made with one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicSummary {
    pub heuristic: Heuristic,
    pub solved: usize,
    /// Runs that exhausted the open set or hit the expansion limit.
    pub unsolved: usize,
    pub total_nodes: u64,
    pub total_secs: f64,
    /// Sum of path lengths over solved runs.
    pub total_path_length: u64,
}

impl HeuristicSummary {
    pub fn new(heuristic: Heuristic) -> Self {
        HeuristicSummary {
            heuristic,
            solved: 0,
            unsolved: 0,
            total_nodes: 0,
            total_secs: 0.0,
            total_path_length: 0,
        }
    }

    pub fn runs(&self) -> usize {
        self.solved + self.unsolved
    }

    /// Mean nodes explored per run, 0 before any run.
    pub fn avg_nodes(&self) -> f64 {
        mean(self.total_nodes as f64, self.runs())
    }

    pub fn avg_secs(&self) -> f64 {
        mean(self.total_secs, self.runs())
    }

    /// Mean path length over solved runs only.
    pub fn avg_path_length(&self) -> f64 {
        mean(self.total_path_length as f64, self.solved)
    }

    fn record(&mut self, outcome: &SearchOutcome) {
        self.total_nodes += outcome.nodes_explored();
        self.total_secs += outcome.elapsed_secs();
        match outcome.path_length() {
            Some(length) => {
                self.solved += 1;
                self.total_path_length += u64::from(length);
            }
            None => self.unsolved += 1,
        }
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

impl fmt::Display for HeuristicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heuristic {} solved {} puzzles with avg nodes {:.2}, avg time {:.6}s",
            self.heuristic,
            self.solved,
            self.avg_nodes(),
            self.avg_secs()
        )?;
        if self.unsolved > 0 {
            write!(f, " ({} unsolved)", self.unsolved)?;
        }
        Ok(())
    }
}

/// Per-heuristic summaries of a benchmark, in the order the heuristics were configured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub puzzles: usize,
    pub summaries: Vec<HeuristicSummary>,
}

impl BenchmarkReport {
    pub fn new(puzzles: usize, heuristics: &[Heuristic]) -> Self {
        BenchmarkReport {
            puzzles,
            summaries: heuristics.iter().copied().map(HeuristicSummary::new).collect(),
        }
    }

    /// Fold one job result into the summary of its heuristic.
    pub fn record(&mut self, result: &JobResult) {
        let heuristic = result.job.heuristic;
        if !result.outcome.is_solved() {
            log::warn!(
                "puzzle {} was not solved with {heuristic}: {:?}",
                result.job.puzzle,
                result.outcome.phase()
            );
        }

        let position = match self.summaries.iter().position(|s| s.heuristic == heuristic) {
            Some(position) => position,
            None => {
                self.summaries.push(HeuristicSummary::new(heuristic));
                self.summaries.len() - 1
            }
        };
        self.summaries[position].record(&result.outcome);
    }

    pub fn summary(&self, heuristic: Heuristic) -> Option<&HeuristicSummary> {
        self.summaries.iter().find(|s| s.heuristic == heuristic)
    }

    /// Total number of results folded in.
    pub fn runs(&self) -> usize {
        self.summaries.iter().map(HeuristicSummary::runs).sum()
    }

    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, summary) in self.summaries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
