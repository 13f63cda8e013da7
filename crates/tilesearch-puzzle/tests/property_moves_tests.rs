use proptest::prelude::*;
use tilesearch_puzzle::{
    Board, CELLS, Heuristic, IdentityScheme, PuzzleState, inversion_count, is_solvable,
    manhattan_distance, successors,
};

fn board_strategy() -> impl Strategy<Value = Board> {
    Just((0..CELLS as u8).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|tiles| {
            let tiles: [u8; CELLS] = tiles.try_into().expect("nine tiles");
            Board::new(tiles).expect("shuffle is a permutation")
        })
}

proptest! {
    #[test]
    fn successors_move_the_blank_by_one_cell(board in board_strategy(), g in 0u32..50) {
        let state = PuzzleState { board, g };
        let children = successors(&state);
        prop_assert!((2..=4).contains(&children.len()));

        let blank = board.blank_index();
        for child in &children {
            prop_assert_eq!(child.g, g + 1);
            let moved = child.board.blank_index();
            let (r0, c0) = (blank / 3, blank % 3);
            let (r1, c1) = (moved / 3, moved % 3);
            prop_assert_eq!(r0.abs_diff(r1) + c0.abs_diff(c1), 1);
            prop_assert_eq!(child.board.tiles()[blank], board.tiles()[moved]);
        }
    }

    #[test]
    fn moves_preserve_solvability(board in board_strategy()) {
        let solvable = is_solvable(&board, &Board::GOAL);
        for child in successors(&PuzzleState::start(board)) {
            prop_assert_eq!(is_solvable(&child.board, &Board::GOAL), solvable);
            prop_assert_eq!(
                inversion_count(&child.board) % 2,
                inversion_count(&board) % 2
            );
        }
    }

    #[test]
    fn manhattan_changes_by_one_per_move(board in board_strategy()) {
        let before = manhattan_distance(&board, &Board::GOAL);
        for child in successors(&PuzzleState::start(board)) {
            let after = manhattan_distance(&child.board, &Board::GOAL);
            prop_assert_eq!(before.abs_diff(after), 1);
        }
    }

    #[test]
    fn heuristics_vanish_on_goal_and_add_path_cost(g in 0u32..100) {
        let state = PuzzleState { board: Board::GOAL, g };
        for heuristic in Heuristic::ALL {
            prop_assert_eq!(heuristic.score(&state, &Board::GOAL), g);
        }
    }

    #[test]
    fn identity_is_pure_and_separates_depths(board in board_strategy(), g in 0u32..9) {
        let shallow = PuzzleState { board, g };
        let deep = PuzzleState { board, g: g + 1 };
        for scheme in IdentityScheme::ALL {
            prop_assert_eq!(scheme.state_id(&shallow), scheme.state_id(&shallow));
        }
        prop_assert_ne!(
            IdentityScheme::WithPathCost.state_id(&shallow),
            IdentityScheme::WithPathCost.state_id(&deep)
        );
    }
}
