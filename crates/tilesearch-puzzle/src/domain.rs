use tilesearch_core::{AStar, SearchConfig, SearchDomain, SearchMetrics, SearchOutcome};

use crate::{
    Board, Heuristic, IdentityScheme, PuzzleError, PuzzleState, is_solvable, successors,
};

/// The 8-puzzle as a search domain. The goal is carried explicitly so that
/// heuristics and the goal test never read shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightPuzzle {
    goal: Board,
}

impl Default for EightPuzzle {
    fn default() -> Self {
        EightPuzzle::new(Board::GOAL)
    }
}

impl EightPuzzle {
    pub fn new(goal: Board) -> Self {
        EightPuzzle { goal }
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Solve one start board with a fresh driver.
    pub fn solve(
        &self,
        start: Board,
        heuristic: Heuristic,
        identity: IdentityScheme,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, PuzzleError> {
        let mut astar = AStar::new(config.clone());
        self.solve_with(&mut astar, start, heuristic, identity)
    }

    /// Solve one start board reusing `astar`; each call still searches from scratch.
    ///
    /// A start with the wrong inversion parity can never reach the goal. It is
    /// reported as `Exhausted` with zero expansions without searching. Under
    /// `WithPathCost` identities that search would never terminate.
    pub fn solve_with(
        &self,
        astar: &mut AStar,
        start: Board,
        heuristic: Heuristic,
        identity: IdentityScheme,
    ) -> Result<SearchOutcome, PuzzleError> {
        let goal = self.goal;
        if !is_solvable(&start, &goal) {
            log::debug!(
                "{:?} has the wrong inversion parity, goal unreachable",
                start.tiles()
            );
            return Ok(SearchOutcome::Exhausted(SearchMetrics::default()));
        }

        log::debug!(
            "solving {:?} with {heuristic} ({identity} identity)",
            start.tiles()
        );
        let outcome = astar.run(
            self,
            PuzzleState::start(start),
            move |state: &PuzzleState| heuristic.score(state, &goal),
            move |state: &PuzzleState| identity.state_id(state),
        )?;
        Ok(outcome)
    }
}

impl SearchDomain for EightPuzzle {
    type State = PuzzleState;

    fn successors(&self, state: &PuzzleState) -> Vec<PuzzleState> {
        successors(state)
    }

    fn is_goal(&self, state: &PuzzleState) -> bool {
        state.board == self.goal
    }

    fn path_cost(&self, state: &PuzzleState) -> u32 {
        state.g
    }
}
