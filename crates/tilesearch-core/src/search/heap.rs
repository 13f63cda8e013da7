use std::{collections::HashMap, fmt};

use crate::search::{error::HeapError, ids::StateId};

/// One stored state together with its cached score and identity.
/// States are never mutated while stored, so caching both at push time is sound.
#[derive(Debug, Clone)]
struct HeapEntry<S, P> {
    state: S,
    score: P,
    id: StateId,
}

/// Binary min-heap with an identity index on the side.
///
/// Ordering comes from a caller-supplied `score` function (smaller pops first)
/// and lookup from an `identity` function. The side map from `StateId` to array
/// position turns "find by identity" into O(1), which is what lets the search
/// driver emulate decrease-key with `remove` followed by `push`.
///
/// Positions are 1-based: the parent of `i` is `i / 2` and its children are
/// `2i` and `2i + 1`. Position 0 never appears in the index.
pub struct IndexedHeap<S, P, FScore, FId> {
    entries: Vec<HeapEntry<S, P>>,
    positions: HashMap<StateId, usize>,
    score: FScore,
    identity: FId,
}

impl<S, P, FScore, FId> IndexedHeap<S, P, FScore, FId>
where
    P: Ord + Copy,
    FScore: Fn(&S) -> P,
    FId: Fn(&S) -> StateId,
{
    /// Create an empty heap ordered by `score` and indexed by `identity`.
    pub fn new(score: FScore, identity: FId) -> Self {
        Self::with_capacity(0, score, identity)
    }

    /// Create an empty heap with room for `capacity` states.
    pub fn with_capacity(capacity: usize, score: FScore, identity: FId) -> Self {
        IndexedHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            score,
            identity,
        }
    }

    /// Number of stored states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the heap holds no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute the identity of a state with this heap's identity function.
    pub fn identity_of(&self, state: &S) -> StateId {
        (self.identity)(state)
    }

    /// Compute the score of a state with this heap's scoring function.
    pub fn score_of(&self, state: &S) -> P {
        (self.score)(state)
    }

    /// O(1) membership test by identity.
    pub fn contains(&self, state_id: StateId) -> bool {
        self.positions.contains_key(&state_id)
    }

    /// Borrow the stored state with the given identity.
    pub fn get(&self, state_id: StateId) -> Option<&S> {
        self.positions
            .get(&state_id)
            .map(|&position| &self.entries[position - 1].state)
    }

    /// Borrow the minimum-score state without removing it.
    pub fn peek(&self) -> Option<&S> {
        self.entries.first().map(|entry| &entry.state)
    }

    /// Iterate stored states in array order (not score order).
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|entry| &entry.state)
    }

    /// Drop every stored state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Insert a state.
    /// Fails with `DuplicateIdentity` if a state with the same identity is stored;
    /// callers are expected to check `contains` first.
    pub fn push(&mut self, state: S) -> Result<(), HeapError> {
        let id = (self.identity)(&state);
        if self.positions.contains_key(&id) {
            return Err(HeapError::DuplicateIdentity { state_id: id });
        }

        let score = (self.score)(&state);
        self.entries.push(HeapEntry { state, score, id });
        let position = self.entries.len();
        self.positions.insert(id, position);
        self.sift_up(position);
        Ok(())
    }

    /// Remove and return the minimum-score state.
    pub fn pop(&mut self) -> Option<S> {
        let last = self.entries.len();
        if last == 0 {
            return None;
        }

        self.swap(1, last);
        let entry = self.entries.pop()?;
        self.positions.remove(&entry.id);
        self.sift_down(1);
        Some(entry.state)
    }

    /// Remove and return the state with the given identity.
    /// Fails with `MissingIdentity` if nothing is stored under it.
    pub fn remove(&mut self, state_id: StateId) -> Result<S, HeapError> {
        let position = *self
            .positions
            .get(&state_id)
            .ok_or(HeapError::MissingIdentity { state_id })?;

        let last = self.entries.len();
        self.swap(position, last);
        let entry = self
            .entries
            .pop()
            .ok_or(HeapError::MissingIdentity { state_id })?;
        self.positions.remove(&entry.id);

        // The element moved into `position` can only violate the heap upward or downward.
        if position <= self.entries.len() {
            if position > 1 && self.not_below(position / 2, position) {
                self.sift_up(position);
            } else {
                self.sift_down(position);
            }
        }

        Ok(entry.state)
    }

    /// `score(upper) >= score(lower)`; false when either position is empty.
    fn not_below(&self, upper: usize, lower: usize) -> bool {
        if upper == 0 || lower == 0 {
            return false;
        }
        match (self.entries.get(upper - 1), self.entries.get(lower - 1)) {
            (Some(upper), Some(lower)) => upper.score >= lower.score,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 1 && self.not_below(position / 2, position) {
            self.swap(position, position / 2);
            position /= 2;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position;
            let right = left + 1;
            if !self.not_below(position, left) && !self.not_below(position, right) {
                break;
            }

            // Ties between the children go right.
            let child = if self.not_below(left, right) {
                right
            } else {
                left
            };
            self.swap(position, child);
            position = child;
        }
    }

    /// Swap two occupied positions and keep the identity index in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a - 1, b - 1);
        self.positions.insert(self.entries[a - 1].id, a);
        self.positions.insert(self.entries[b - 1].id, b);
    }

    /// Verify the heap property and that the identity index mirrors the array.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> bool {
        if self.positions.len() != self.entries.len() {
            return false;
        }
        for (offset, entry) in self.entries.iter().enumerate() {
            let position = offset + 1;
            if self.positions.get(&entry.id) != Some(&position) {
                return false;
            }
            if position > 1 && self.entries[position / 2 - 1].score > entry.score {
                return false;
            }
        }
        !self.positions.values().any(|&position| position == 0)
    }
}

impl<S, P, FScore, FId> fmt::Debug for IndexedHeap<S, P, FScore, FId>
where
    S: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
