use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tilesearch_core::SearchConfig;

use crate::{Heuristic, IdentityScheme, PuzzleError};

const DEFAULT_BENCH_CONFIG_YAML: &str = include_str!("../config/bench.default.yaml");

/// Settings for one benchmark run: how many starts, which heuristics, and how
/// many workers to fan the searches out to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of random solvable start boards; each is solved once per heuristic.
    pub puzzles: usize,
    /// Worker threads. `0` runs every search on the calling thread.
    pub workers: usize,
    pub seed: u64,
    pub heuristics: Vec<Heuristic>,
    pub identity: IdentityScheme,
    pub search: SearchConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            puzzles: 15,
            workers: 4,
            seed: 7,
            heuristics: vec![
                Heuristic::MisplacedTiles,
                Heuristic::Manhattan,
                Heuristic::ManhattanReversals,
            ],
            identity: IdentityScheme::WithPathCost,
            search: SearchConfig::default(),
        }
    }
}

impl BenchmarkConfig {
    /// Parse a benchmark config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PuzzleError> {
        let config: BenchmarkConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a benchmark config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_BENCH_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, PuzzleError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.puzzles == 0 {
            return Err(PuzzleError::InvalidConfig(
                "puzzles must be greater than 0".to_string(),
            ));
        }
        if self.heuristics.is_empty() {
            return Err(PuzzleError::InvalidConfig(
                "at least one heuristic is required".to_string(),
            ));
        }
        for (i, heuristic) in self.heuristics.iter().enumerate() {
            if self.heuristics[..i].contains(heuristic) {
                return Err(PuzzleError::InvalidConfig(format!(
                    "heuristic '{heuristic}' is listed twice"
                )));
            }
        }
        self.search.validate()?;
        Ok(())
    }

    /// Queue capacity for a generated batch: one job per puzzle and heuristic.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity_for(self.puzzles * self.heuristics.len())
    }

    /// Queue capacity that lets `jobs` plus one sentinel per worker be enqueued
    /// before anyone drains the queue.
    pub fn queue_capacity_for(&self, jobs: usize) -> usize {
        jobs + self.workers + 1
    }
}
