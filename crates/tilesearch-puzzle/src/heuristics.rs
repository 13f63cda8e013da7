use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Board, CELLS, PuzzleError, PuzzleState, SIDE, board::neighbors};

/// Scoring functions for the open set. Each returns `f = g + h`; the search
/// driver adds nothing on top. Admissibility is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Tiles not on their goal cell, blank ignored.
    MisplacedTiles,
    /// Sum of each tile's row and column distance to its goal cell.
    Manhattan,
    /// Adjacent tile pairs sitting in each other's goal cells. Weak on its own.
    DirectReversals,
    /// `Manhattan` plus `DirectReversals`.
    ManhattanReversals,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::MisplacedTiles,
        Heuristic::Manhattan,
        Heuristic::DirectReversals,
        Heuristic::ManhattanReversals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "misplaced_tiles",
            Heuristic::Manhattan => "manhattan",
            Heuristic::DirectReversals => "direct_reversals",
            Heuristic::ManhattanReversals => "manhattan_reversals",
        }
    }

    /// Short alias `h1`..`h4`.
    pub fn alias(self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::Manhattan => "h2",
            Heuristic::DirectReversals => "h3",
            Heuristic::ManhattanReversals => "h4",
        }
    }

    /// Evaluation `f = g + h` of a state against `goal`.
    pub fn score(self, state: &PuzzleState, goal: &Board) -> u32 {
        state.g + self.estimate(&state.board, goal)
    }

    /// The `h` component alone.
    pub fn estimate(self, board: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board, goal),
            Heuristic::Manhattan => manhattan_distance(board, goal),
            Heuristic::DirectReversals => direct_reversals(board, goal),
            Heuristic::ManhattanReversals => {
                manhattan_distance(board, goal) + direct_reversals(board, goal)
            }
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    /// Accepts the snake_case name (dashes allowed) or the `h1`..`h4` alias.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name() == normalized || h.alias() == normalized)
            .ok_or_else(|| PuzzleError::UnknownHeuristic {
                name: name.to_string(),
            })
    }
}

pub fn misplaced_tiles(board: &Board, goal: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&tile, &target)| tile != 0 && tile != target)
        .count() as u32
}

pub fn manhattan_distance(board: &Board, goal: &Board) -> u32 {
    let mut goal_cell = [0usize; CELLS];
    for (cell, &tile) in goal.tiles().iter().enumerate() {
        goal_cell[tile as usize] = cell;
    }

    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(cell, &tile)| {
            let target = goal_cell[tile as usize];
            ((cell / SIDE).abs_diff(target / SIDE) + (cell % SIDE).abs_diff(target % SIDE)) as u32
        })
        .sum()
}

/// Counted from every non-blank tile, so a swapped pair of tiles scores 2 and a
/// tile swapped with the blank scores 1.
pub fn direct_reversals(board: &Board, goal: &Board) -> u32 {
    let tiles = board.tiles();
    let targets = goal.tiles();

    (0..CELLS)
        .filter(|&cell| tiles[cell] != 0)
        .map(|cell| {
            neighbors(cell)
                .filter(|&other| tiles[other] == targets[cell] && tiles[cell] == targets[other])
                .count() as u32
        })
        .sum()
}
