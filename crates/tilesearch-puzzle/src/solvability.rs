use crate::Board;

/// Number of tile pairs out of order when the board is read row by row, blank skipped.
pub fn inversion_count(board: &Board) -> usize {
    let tiles: Vec<u8> = board.tiles().iter().copied().filter(|&t| t != 0).collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &later)| tiles[..i].iter().filter(|&&earlier| earlier > later).count())
        .sum()
}

/// On an odd-width grid a board can reach the goal iff their inversion counts share parity.
pub fn is_solvable(board: &Board, goal: &Board) -> bool {
    inversion_count(board) % 2 == inversion_count(goal) % 2
}
