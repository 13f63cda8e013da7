use thiserror::Error;
use tilesearch_core::{SearchConfigError, SearchError};

#[derive(Debug, Error)]
/// Error type for board parsing, heuristic lookup, solving, and benchmark runs.
pub enum PuzzleError {
    #[error("invalid board {tiles:?}: tiles must be a permutation of 0..8")]
    InvalidBoard { tiles: Vec<u8> },

    #[error("cannot parse board '{input}': {reason}")]
    ParseBoard { input: String, reason: String },

    #[error("unknown heuristic '{name}'")]
    UnknownHeuristic { name: String },

    #[error("unknown identity scheme '{name}'")]
    UnknownIdentityScheme { name: String },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    #[error(transparent)]
    SearchConfig(#[from] SearchConfigError),

    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),

    #[error("a benchmark worker panicked")]
    WorkerPanicked,

    #[error("work queue closed before every result arrived")]
    QueueClosed,
}
