use std::fmt;

/// Canonical identity of a search state.
/// Must be a pure function of the state's content, never of its address, since
/// both the open heap and the closed set locate entries by this key alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u64);

impl StateId {
    /// Return the internal numeric representation of this id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StateId {
    /// Allow for explicit conversion from u64 to StateId.
    fn from(value: u64) -> Self {
        StateId(value)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
