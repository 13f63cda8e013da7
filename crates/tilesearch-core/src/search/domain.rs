/// Generic interface for implicit state spaces searched by `AStar`.
///
/// The driver never inspects states itself: it only asks the domain for
/// successors, for the goal test, and for the path cost carried in a state.
pub trait SearchDomain {
    type State: Clone;

    /// Return every state reachable by one legal move.
    /// The order must be stable so node counts are reproducible.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Return whether a state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Return the accumulated path cost `g` carried by a state.
    fn path_cost(&self, state: &Self::State) -> u32;
}
