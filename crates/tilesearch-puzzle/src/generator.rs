use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::{Board, CELLS, is_solvable};

#[derive(Debug, Clone)]
/// Seeded source of random start boards.
pub struct PuzzleGenerator {
    rng: ChaCha8Rng,
}

impl PuzzleGenerator {
    /// Create a generator with deterministic RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniformly shuffled board; may be unsolvable.
    pub fn random_board(&mut self) -> Board {
        let mut tiles: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(&mut self.rng);
        Board::from_permutation(tiles)
    }

    /// Draw boards until one can reach `goal`. Half of all shuffles qualify.
    pub fn random_solvable(&mut self, goal: &Board) -> Board {
        loop {
            let board = self.random_board();
            if is_solvable(&board, goal) {
                return board;
            }
        }
    }

    /// Draw `count` solvable boards.
    pub fn random_solvable_batch(&mut self, count: usize, goal: &Board) -> Vec<Board> {
        (0..count).map(|_| self.random_solvable(goal)).collect()
    }
}
