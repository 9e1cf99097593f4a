use super::grid::{Grid, Position};
use rand::Rng;

/// The single piece of food on the field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    position: Position,
}

impl Food {
    pub(super) fn new(position: Position) -> Food {
        Food { position }
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Move the food to a random cell for which `is_blocked` returns `false`.
    /// Returns `false` and leaves the food where it is if there is no such
    /// cell.
    pub(super) fn randomize_position<R, F>(&mut self, grid: Grid, rng: &mut R, is_blocked: F) -> bool
    where
        R: Rng + ?Sized,
        F: Fn(Position) -> bool,
    {
        match grid.find_free_cell(rng, is_blocked) {
            Some(pos) => {
                self.position = pos;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn randomize_avoids_occupied() {
        let grid = Grid::new(100, 60, 20);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let occupied = [
            Position::new(0, 0),
            Position::new(20, 0),
            Position::new(40, 0),
            Position::new(60, 0),
            Position::new(80, 0),
            Position::new(0, 20),
        ];
        let mut food = Food::new(Position::new(0, 0));
        for _ in 0..100 {
            assert!(food.randomize_position(grid, &mut rng, |p| occupied.contains(&p)));
            assert!(!occupied.contains(&food.position()));
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn randomize_on_full_grid_stays_put() {
        let grid = Grid::new(40, 40, 20);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let mut food = Food::new(Position::new(20, 20));
        assert!(!food.randomize_position(grid, &mut rng, |_| true));
        assert_eq!(food.position(), Position::new(20, 20));
    }
}
