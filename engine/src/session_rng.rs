use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::game::{Arena, Cell};

/// Seeded random source owned by one engine. The same seed replays the same
/// sequence of food placements.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform grid-aligned cell of `arena`. The arena must have at least one
    /// column and one row.
    pub fn random_cell(&mut self, arena: &Arena) -> Cell {
        let s = arena.segment_size;
        let x = self.rng.random_range(0..arena.columns()) * s;
        let y = self.rng.random_range(0..arena.rows()) * s;
        Cell::new(x, y)
    }

    /// Uniform pick among `candidates`; `None` when there are none.
    pub fn choose_cell(&mut self, candidates: &[Cell]) -> Option<Cell> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_cells() {
        let arena = Arena::new(300, 300, 10);
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.random_cell(&arena), b.random_cell(&arena));
        }
    }

    #[test]
    fn test_random_cell_is_on_grid() {
        let arena = Arena::new(60, 40, 20);
        let mut rng = SessionRng::new(1);
        for _ in 0..1000 {
            let cell = rng.random_cell(&arena);
            assert!(arena.contains(cell));
            assert_eq!(cell.x % 20, 0);
            assert_eq!(cell.y % 20, 0);
        }
    }

    #[test]
    fn test_choose_cell() {
        let mut rng = SessionRng::new(1);
        assert_eq!(rng.choose_cell(&[]), None);

        let candidates = [Cell::new(0, 0), Cell::new(10, 0), Cell::new(20, 0)];
        for _ in 0..100 {
            let cell = rng.choose_cell(&candidates).unwrap();
            assert!(candidates.contains(&cell));
        }
    }
}
