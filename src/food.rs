use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::snake::Snake;

/// Rejection-sampling budget before falling back to a free-cell scan.
const MAX_SAMPLE_ATTEMPTS: u32 = 1000;

/// Places food in uniformly random unoccupied cells.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic spawner for tests and reproducible simulations.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly random cell not occupied by the snake, or `None`
    /// when the snake covers the whole board.
    ///
    /// Draws random cells and rejects occupied ones, which stays O(1) per
    /// draw while the board is sparse. Once the sample budget is exhausted
    /// the free cells are enumerated and one is drawn directly, so a nearly
    /// full board cannot stall the tick.
    pub fn spawn(&mut self, board: Board, snake: &Snake) -> Option<Cell> {
        if snake.len() >= board.total_cells() {
            return None;
        }

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = self.random_cell(board);
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }

        let size = i32::from(board.size());
        let free: Vec<Cell> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.occupies(*cell))
            .collect();

        let index = self.rng.gen_range(0..free.len());
        Some(free[index])
    }

    fn random_cell(&mut self, board: Board) -> Cell {
        let size = i32::from(board.size());
        Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
