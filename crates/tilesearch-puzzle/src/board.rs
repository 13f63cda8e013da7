use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::PuzzleError;

/// Width and height of the grid.
pub const SIDE: usize = 3;
/// Number of cells on the grid.
pub const CELLS: usize = SIDE * SIDE;

/// Tile arrangement of an 8-puzzle, row-major. `0` is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board([u8; CELLS]);

impl Board {
    /// Goal arrangement used by the benchmark:
    ///
    /// ```text
    /// 1 2 3
    /// 4 . 5
    /// 6 7 8
    /// ```
    pub const GOAL: Board = Board([1, 2, 3, 4, 0, 5, 6, 7, 8]);

    /// Build a board, checking that the tiles are a permutation of `0..9`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| PuzzleError::InvalidBoard {
                tiles: tiles.to_vec(),
            })?;
            if *slot {
                return Err(PuzzleError::InvalidBoard {
                    tiles: tiles.to_vec(),
                });
            }
            *slot = true;
        }
        Ok(Board(tiles))
    }

    /// Build a board from three rows.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<Self, PuzzleError> {
        let mut tiles = [0u8; CELLS];
        for (row, values) in rows.iter().enumerate() {
            tiles[row * SIDE..(row + 1) * SIDE].copy_from_slice(values);
        }
        Self::new(tiles)
    }

    /// Wrap tiles already known to be a permutation.
    pub(crate) fn from_permutation(tiles: [u8; CELLS]) -> Self {
        debug_assert!(Board::new(tiles).is_ok());
        Board(tiles)
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[0u8; SIDE]; SIDE];
        for (index, &tile) in self.0.iter().enumerate() {
            rows[index / SIDE][index % SIDE] = tile;
        }
        rows
    }

    /// Tile at `(row, col)`; both must be below `SIDE`.
    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.0[row * SIDE + col]
    }

    /// Cell index holding `tile`, if it is on the board.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.0.iter().position(|&t| t == tile)
    }

    /// Cell index of the blank.
    pub fn blank_index(&self) -> usize {
        // Every valid board holds exactly one blank.
        self.position_of(0).unwrap_or_default()
    }

    /// Copy of this board with two cells exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.0;
        tiles.swap(a, b);
        Board(tiles)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::GOAL
    }
}

/// Orthogonal neighbours of a cell, in up, down, left, right order.
pub(crate) fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    const DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let (row, col) = (index / SIDE, index % SIDE);
    DELTAS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < SIDE)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < SIDE)?;
        Some(r * SIDE + c)
    })
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Accepts `"1,2,3,4,0,5,6,7,8"`, `"123 405 678"` and similar: nine digits,
    /// optionally separated by commas or whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason: &str| PuzzleError::ParseBoard {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let mut tiles = Vec::with_capacity(CELLS);
        for ch in input.chars() {
            if ch == ',' || ch.is_whitespace() {
                continue;
            }
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| parse_error(&format!("unexpected character '{ch}'")))?;
            tiles.push(digit as u8);
        }

        let tiles: [u8; CELLS] = tiles
            .try_into()
            .map_err(|tiles: Vec<u8>| parse_error(&format!("expected 9 tiles, found {}", tiles.len())))?;
        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = values
                .iter()
                .map(|&tile| match tile {
                    0 => ".".to_string(),
                    tile => tile.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// A board together with the number of moves `g` spent reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PuzzleState {
    pub board: Board,
    pub g: u32,
}

impl PuzzleState {
    /// Initial search state for a board (`g = 0`).
    pub fn start(board: Board) -> Self {
        PuzzleState { board, g: 0 }
    }
}
