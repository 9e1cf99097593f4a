use super::grid::Position;
use std::collections::HashSet;

/// The rocks currently on the field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ObstacleSet(HashSet<Position>);

impl ObstacleSet {
    pub(super) fn new() -> ObstacleSet {
        ObstacleSet::default()
    }

    /// Place a rock at `pos`.  It is up to the caller to make sure the cell
    /// is free.
    pub(super) fn spawn_at(&mut self, pos: Position) {
        self.0.insert(pos);
    }

    pub(super) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_clear() {
        let mut rocks = ObstacleSet::new();
        assert!(rocks.is_empty());
        rocks.spawn_at(Position::new(20, 40));
        rocks.spawn_at(Position::new(60, 0));
        assert_eq!(rocks.len(), 2);
        assert!(rocks.contains(Position::new(20, 40)));
        assert!(!rocks.contains(Position::new(40, 20)));
        let mut cells = rocks.iter().collect::<Vec<_>>();
        cells.sort_unstable();
        assert_eq!(cells, [Position::new(20, 40), Position::new(60, 0)]);
        rocks.clear();
        assert!(rocks.is_empty());
        assert!(!rocks.contains(Position::new(20, 40)));
    }
}
