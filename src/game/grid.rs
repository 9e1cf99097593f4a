use super::direction::Direction;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// A point on the playing field, in pixels.  Both coordinates are multiples
/// of the grid's cell size.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// Geometry of the playing field.  Movement off one edge wraps around to the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: u16,
    height: u16,
    cell: u16,
}

impl Grid {
    /// Create a grid `width` × `height` pixels in size, divided into square
    /// cells with edges `cell` pixels long.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is zero or does not evenly divide both dimensions, or
    /// if the grid would have no cells.
    pub(crate) const fn new(width: u16, height: u16, cell: u16) -> Grid {
        assert!(cell > 0, "cell size must be nonzero");
        assert!(
            width % cell == 0 && height % cell == 0,
            "grid dimensions must be multiples of the cell size"
        );
        assert!(width > 0 && height > 0, "grid must not be empty");
        Grid {
            width,
            height,
            cell,
        }
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> u16 {
        self.width / self.cell
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> u16 {
        self.height / self.cell
    }

    /// The cell in the middle of the field, where the snake starts
    pub(crate) fn center(self) -> Position {
        self.position_of(self.columns() / 2, self.rows() / 2)
    }

    /// Return the position of the cell in column `col` and row `row`
    pub(crate) fn position_of(self, col: u16, row: u16) -> Position {
        let cell = i32::from(self.cell);
        Position::new(i32::from(col) * cell, i32::from(row) * cell)
    }

    /// Return the column & row of the cell at `pos`, or `None` if `pos` is not
    /// on the grid
    pub(crate) fn cell_of(self, pos: Position) -> Option<(u16, u16)> {
        if !self.contains(pos) {
            return None;
        }
        let cell = i32::from(self.cell);
        let col = u16::try_from(pos.x / cell).ok()?;
        let row = u16::try_from(pos.y / cell).ok()?;
        Some((col, row))
    }

    /// Is `pos` a cell-aligned point inside the field?
    pub(crate) fn contains(self, pos: Position) -> bool {
        let cell = i32::from(self.cell);
        (0..i32::from(self.width)).contains(&pos.x)
            && (0..i32::from(self.height)).contains(&pos.y)
            && pos.x % cell == 0
            && pos.y % cell == 0
    }

    /// Return the cell one step from `pos` in `direction`, wrapping around
    /// the edges of the field
    pub(crate) fn step(self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        let cell = i32::from(self.cell);
        Position::new(
            (pos.x + dx * cell).rem_euclid(i32::from(self.width)),
            (pos.y + dy * cell).rem_euclid(i32::from(self.height)),
        )
    }

    /// Iterate over every cell in the field, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Position> {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| self.position_of(col, row)))
    }

    /// Return a cell chosen uniformly at random
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        self.position_of(col, row)
    }

    /// Return a random cell for which `is_blocked` returns `false`.
    ///
    /// Cells are sampled at random until one is acceptable.  If
    /// [`MAX_PLACEMENT_ATTEMPTS`][consts::MAX_PLACEMENT_ATTEMPTS] samples are
    /// all rejected, the field is nearly full, and a cell is instead chosen
    /// from among all remaining free cells.  Returns `None` if there are no
    /// free cells at all.
    pub(crate) fn find_free_cell<R, F>(self, rng: &mut R, is_blocked: F) -> Option<Position>
    where
        R: Rng + ?Sized,
        F: Fn(Position) -> bool,
    {
        for _ in 0..consts::MAX_PLACEMENT_ATTEMPTS {
            let pos = self.random_cell(rng);
            if !is_blocked(pos) {
                return Some(pos);
            }
        }
        self.cells().filter(|&pos| !is_blocked(pos)).choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn grid() -> Grid {
        Grid::new(640, 480, 20)
    }

    #[test]
    fn dimensions() {
        let grid = grid();
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cells().count(), 768);
        assert_eq!(grid.center(), Position::new(320, 240));
    }

    #[rstest]
    #[case(Direction::Up, Position::new(100, 100), Position::new(100, 80))]
    #[case(Direction::Down, Position::new(100, 100), Position::new(100, 120))]
    #[case(Direction::Left, Position::new(100, 100), Position::new(80, 100))]
    #[case(Direction::Right, Position::new(100, 100), Position::new(120, 100))]
    #[case(Direction::Up, Position::new(100, 0), Position::new(100, 460))]
    #[case(Direction::Down, Position::new(100, 460), Position::new(100, 0))]
    #[case(Direction::Left, Position::new(0, 100), Position::new(620, 100))]
    #[case(Direction::Right, Position::new(620, 100), Position::new(0, 100))]
    #[case(Direction::Left, Position::new(0, 0), Position::new(620, 0))]
    #[case(Direction::Up, Position::new(620, 0), Position::new(620, 460))]
    fn test_step(#[case] d: Direction, #[case] pos: Position, #[case] r: Position) {
        assert_eq!(grid().step(pos, d), r);
    }

    #[rstest]
    #[case(Grid::new(40, 20, 20))]
    #[case(Grid::new(100, 60, 20))]
    #[case(Grid::new(640, 480, 20))]
    #[case(Grid::new(7, 3, 1))]
    fn wraparound_any_width(#[case] grid: Grid) {
        let row = grid.rows() - 1;
        let last = grid.position_of(grid.columns() - 1, row);
        assert_eq!(grid.step(last, Direction::Right), grid.position_of(0, row));
        let first = grid.position_of(0, row);
        assert_eq!(grid.step(first, Direction::Left), last);
        let bottom = grid.position_of(1, grid.rows() - 1);
        assert_eq!(grid.step(bottom, Direction::Down), grid.position_of(1, 0));
        assert_eq!(grid.step(grid.position_of(1, 0), Direction::Up), bottom);
    }

    #[rstest]
    #[case(Position::new(0, 0), Some((0, 0)))]
    #[case(Position::new(620, 460), Some((31, 23)))]
    #[case(Position::new(320, 240), Some((16, 12)))]
    #[case(Position::new(640, 0), None)]
    #[case(Position::new(0, -20), None)]
    #[case(Position::new(10, 0), None)]
    fn test_cell_of(#[case] pos: Position, #[case] r: Option<(u16, u16)>) {
        assert_eq!(grid().cell_of(pos), r);
    }

    #[test]
    fn cells_cover_grid() {
        let grid = Grid::new(60, 40, 20);
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                Position::new(0, 0),
                Position::new(20, 0),
                Position::new(40, 0),
                Position::new(0, 20),
                Position::new(20, 20),
                Position::new(40, 20),
            ]
        );
    }

    #[test]
    fn random_cells_are_on_grid() {
        let grid = grid();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn free_cell_avoids_blocked() {
        let grid = grid();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let pos = grid
                .find_free_cell(&mut rng, |p| p.x < 600)
                .expect("free cells should exist");
            assert!(pos.x >= 600);
            assert!(grid.contains(pos));
        }
    }

    #[test]
    fn free_cell_on_nearly_full_grid() {
        let grid = grid();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let only = Position::new(300, 220);
        assert_eq!(grid.find_free_cell(&mut rng, |p| p != only), Some(only));
    }

    #[test]
    fn no_free_cell_on_full_grid() {
        let grid = grid();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(grid.find_free_cell(&mut rng, |_| true), None);
    }
}
