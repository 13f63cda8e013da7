use crate::{PuzzleState, board::neighbors};

/// States reachable by sliding one tile into the blank, each one move deeper.
/// Children come out in blank-moves-up, down, left, right order.
pub fn successors(state: &PuzzleState) -> Vec<PuzzleState> {
    let blank = state.board.blank_index();
    neighbors(blank)
        .map(|cell| PuzzleState {
            board: state.board.swapped(blank, cell),
            g: state.g + 1,
        })
        .collect()
}
