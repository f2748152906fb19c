//! board - a grid with every cell filled
//! the only public way to observe pieces; empty cells never escape a move

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BoardError, Grid, PieceSource, Position, Positions};

/// A fully populated grid of pieces.
///
/// Boards are plain values: every engine operation takes `&Board` and hands
/// back a new one, so a board the caller holds is never changed underneath
/// them.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board<T> {
    grid: Grid<T>,
}

impl<T> Board<T> {
    /// Fill a `width` x `height` board from `source`, row-major.
    pub fn create<S>(source: &mut S, width: usize, height: usize) -> Result<Self, BoardError>
    where
        S: PieceSource<T> + ?Sized,
    {
        let count = crate::grid::area(width, height)?;
        let values = (0..count).map(|_| source.next_piece()).collect();
        Ok(Self {
            grid: Grid::from_values(width, height, values),
        })
    }

    /// Build a board from explicit rows, top row first.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = T>,
    {
        Grid::from_rows(rows).map(|grid| Self { grid })
    }

    /// Promote a working grid back to a board. Fails if any cell is empty.
    pub fn from_grid(grid: Grid<T>) -> Result<Self, BoardError> {
        match grid.empty_count() {
            0 => Ok(Self { grid }),
            empty => Err(BoardError::Incomplete { empty }),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    pub fn piece_at(&self, pos: Position) -> Result<&T, BoardError> {
        // full-board invariant: an in-bounds cell always holds a piece
        self.grid.get(pos)?.ok_or_else(|| BoardError::Incomplete {
            empty: self.grid.empty_count(),
        })
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> Positions {
        self.grid.positions()
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Take the underlying grid, e.g. as a working copy to mutate.
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Pieces of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> + '_ {
        self.grid.row(row).iter().flatten()
    }
}

impl<T: Clone> Board<T> {
    /// Copy of this board with `a` and `b` exchanged.
    pub fn swapped(&self, a: Position, b: Position) -> Result<Self, BoardError> {
        let mut grid = self.grid.clone();
        grid.swap(a, b)?;
        Ok(Self { grid })
    }
}

impl<T: Serialize> Serialize for Board<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.grid.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Board<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let grid = Grid::<T>::deserialize(deserializer)?;
        Board::from_grid(grid).map_err(serde::de::Error::custom)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Board<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height() {
            for (col, piece) in self.row(row).enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{piece}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
