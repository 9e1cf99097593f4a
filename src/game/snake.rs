use super::direction::Direction;
use super::grid::{Grid, Position};
use crate::consts;
use rand::Rng;
use std::collections::VecDeque;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body other than the
    /// head, with the most recent at the end.  The tail is at the front.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// A requested change of direction, applied at the start of the next move
    pending: Option<Direction>,

    /// The cell freed by the most recent tail removal
    last_vacated: Option<Position>,

    /// Where the snake starts & restarts
    home: Position,
}

/// The outcome of [`Snake::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    Moved,
    /// The snake ran into itself and has been reset
    Collided,
}

impl Snake {
    /// Create a new one-cell snake at `home` facing in `direction`
    pub(super) fn new(home: Position, direction: Direction) -> Snake {
        Snake {
            head: home,
            body: VecDeque::new(),
            direction,
            pending: None,
            last_vacated: None,
            home,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Iterate over the cells of the snake's body other than the head, from
    /// the tail forwards
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Iterate over all cells occupied by the snake, head first
    pub(crate) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    /// The number of cells the snake occupies
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    /// The cell vacated by the tail on the most recent move, if any
    pub(crate) fn last_vacated(&self) -> Option<Position> {
        self.last_vacated
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Request that the snake turn to face `direction` on its next move.
    /// Requests to reverse the current direction are ignored.
    pub(super) fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending = Some(direction);
        }
    }

    /// Move the snake forwards one cell, first applying any pending change of
    /// direction.
    ///
    /// If the new head position would be on the snake's body, the snake is
    /// [`reset`][Snake::reset] instead and `Step::Collided` is returned.
    pub(super) fn advance<R: Rng + ?Sized>(&mut self, grid: Grid, rng: &mut R) -> Step {
        if let Some(d) = self.pending.take() {
            self.direction = d;
        }
        let next = grid.step(self.head, self.direction);
        if self.len() > 1 && self.occupies(next) {
            self.reset(rng);
            return Step::Collided;
        }
        self.body.push_back(self.head);
        self.head = next;
        self.last_vacated = self.body.pop_front();
        Step::Moved
    }

    /// Lengthen the snake by one cell.  `at` is added to the tail end and
    /// will be dropped on the next move in place of the current tail.
    pub(super) fn grow(&mut self, at: Position) {
        self.body.push_front(at);
    }

    /// Shrink the snake back to a single cell at its home position facing in a
    /// random direction
    pub(super) fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.head = self.home;
        self.body.clear();
        self.direction = rng.random();
        self.pending = None;
        self.last_vacated = None;
    }
}
