use std::fmt;

use crate::search::ids::StateId;

/// Error type for indexed heap operations.
/// Both variants are precondition violations on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// Attempted to push a state whose identity is already stored.
    DuplicateIdentity { state_id: StateId },
    /// Attempted to remove a state whose identity is not stored.
    MissingIdentity { state_id: StateId },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateIdentity { state_id } => {
                write!(f, "state with id {state_id} is already in the heap")
            }
            HeapError::MissingIdentity { state_id } => {
                write!(f, "no state with id {state_id} in the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Error type for a single A* run.
/// Running out of open states is an outcome, not an error; anything here is a defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The open set rejected an operation the driver believed was valid.
    Heap(HeapError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Heap(err) => write!(f, "open set corrupted: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Heap(err) => Some(err),
        }
    }
}

impl From<HeapError> for SearchError {
    fn from(err: HeapError) -> Self {
        SearchError::Heap(err)
    }
}
