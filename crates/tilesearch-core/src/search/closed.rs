use std::collections::HashMap;

use crate::search::ids::StateId;

/// Expanded states keyed by identity.
/// An entry is only dropped when a strictly cheaper path to the same identity reopens it.
#[derive(Debug, Clone)]
pub struct ClosedSet<S> {
    states: HashMap<StateId, S>,
}

impl<S> Default for ClosedSet<S> {
    fn default() -> Self {
        ClosedSet {
            states: HashMap::new(),
        }
    }
}

impl<S> ClosedSet<S> {
    /// Create a new empty closed set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expanded state, replacing any previous entry with the same id.
    pub fn insert(&mut self, state_id: StateId, state: S) -> Option<S> {
        self.states.insert(state_id, state)
    }

    pub fn get(&self, state_id: StateId) -> Option<&S> {
        self.states.get(&state_id)
    }

    pub fn contains(&self, state_id: StateId) -> bool {
        self.states.contains_key(&state_id)
    }

    pub fn remove(&mut self, state_id: StateId) -> Option<S> {
        self.states.remove(&state_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
