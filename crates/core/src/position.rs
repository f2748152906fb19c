//! Grid coordinates and run orientation.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell address. Row 0 is the top row; gravity pulls toward
/// increasing row indices.
///
/// The derived ordering is row-major, which is the order every engine
/// sequence (positions, match members, legal moves) is reported in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both positions share a row or a column. A position is
    /// aligned with itself.
    pub fn is_aligned(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// True for orthogonal neighbours only.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Orthogonal neighbours that don't underflow, in up, left, right, down
    /// order. Upper bounds are the grid's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            Some(Position::new(row, col + 1)),
            Some(Position::new(row + 1, col)),
        ]
        .into_iter()
        .flatten()
    }

    /// Step `n` cells along `orientation` (right or down).
    #[inline]
    pub fn step(self, orientation: Orientation, n: usize) -> Position {
        match orientation {
            Orientation::Horizontal => Position::new(self.row, self.col + n),
            Orientation::Vertical => Position::new(self.row + n, self.col),
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_ordering() {
        let mut ps = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        ps.sort();
        assert_eq!(
            ps,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_alignment() {
        let p = Position::new(2, 3);
        assert!(p.is_aligned(Position::new(2, 0)));
        assert!(p.is_aligned(Position::new(7, 3)));
        assert!(!p.is_aligned(Position::new(3, 4)));
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(2, 3);
        assert!(p.is_adjacent(Position::new(1, 3)));
        assert!(p.is_adjacent(Position::new(2, 4)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(3, 4)));
        assert!(!p.is_adjacent(Position::new(2, 5)));
    }

    #[test]
    fn test_neighbors_at_origin() {
        let ns: Vec<_> = Position::new(0, 0).neighbors().collect();
        assert_eq!(ns, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn test_neighbors_interior() {
        let ns: Vec<_> = Position::new(1, 1).neighbors().collect();
        assert_eq!(
            ns,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );
    }
}
