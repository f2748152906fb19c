//! grid storage - row-major Vec of optional pieces
//! empty cells only exist while a cascade pass is between removal and refill

use serde::{Deserialize, Deserializer, Serialize};

use crate::{BoardError, Position};

/// Fixed-size 2-D container of optional piece values.
/// Cell (row, col) lives at index `row * width + col`.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

/// Number of cells in a `width` x `height` grid. Rejects zero in either
/// dimension and products that do not fit in `usize`.
pub(crate) fn area(width: usize, height: usize) -> Result<usize, BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(BoardError::TooLarge { width, height })
}

impl<T> Grid<T> {
    /// All-empty grid. Zero in either dimension is rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let count = area(width, height)?;
        let mut cells = Vec::with_capacity(count);
        cells.resize_with(count, || None);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from rows of values. Every row must have the same
    /// non-zero length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let before = cells.len();
            cells.extend(row.into_iter().map(Some));
            let row_len = cells.len() - before;
            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(BoardError::RaggedRow {
                        row: height,
                        expected,
                        found: row_len,
                    })
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        if self.contains(pos) {
            Ok(pos.row * self.width + pos.col)
        } else {
            Err(BoardError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Bounds-checked read. `Ok(None)` means the cell is empty.
    pub fn get(&self, pos: Position) -> Result<Option<&T>, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Unchecked-by-error read for scans that already know `pos` is in
    /// bounds; out-of-range positions read as empty.
    #[inline]
    pub fn peek(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            self.cells[pos.row * self.width + pos.col].as_ref()
        } else {
            None
        }
    }

    /// Write a cell, returning its previous content.
    pub fn set(&mut self, pos: Position, value: Option<T>) -> Result<Option<T>, BoardError> {
        let idx = self.index(pos)?;
        Ok(std::mem::replace(&mut self.cells[idx], value))
    }

    /// Empty a cell, returning what it held.
    pub fn take(&mut self, pos: Position) -> Result<Option<T>, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx].take())
    }

    /// Exchange two cells. Swapping a cell with itself succeeds and changes
    /// nothing.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), BoardError> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Every in-bounds position in row-major order. The iterator is `Clone`,
    /// so it can be restarted from any point.
    pub fn positions(&self) -> Positions {
        Positions::new(self.width, self.height)
    }

    /// In-bounds orthogonal neighbours of `pos`, up, left, right, down.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |p| self.contains(*p))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// One row as a slice of cells; empty past the last row.
    pub fn row(&self, row: usize) -> &[Option<T>] {
        if row >= self.height {
            return &[];
        }
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Collapse into the piece values if no cell is empty.
    pub fn into_values(self) -> Option<Vec<T>> {
        self.cells.into_iter().collect()
    }

    pub(crate) fn from_values(width: usize, height: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            cells: values.into_iter().map(Some).collect(),
        }
    }
}

#[derive(Deserialize)]
struct RawGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawGrid {
            width,
            height,
            cells,
        } = RawGrid::deserialize(deserializer)?;
        let expected = area(width, height).map_err(serde::de::Error::custom)?;
        if cells.len() != expected {
            return Err(serde::de::Error::custom(format!(
                "expected {expected} cells for a {width}x{height} grid, got {}",
                cells.len()
            )));
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }
}

/// Row-major position iterator over a `width` x `height` grid.
#[derive(Clone, Debug)]
pub struct Positions {
    width: usize,
    total: usize,
    next: usize,
}

impl Positions {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            total: width.saturating_mul(height),
            next: 0,
        }
    }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.total {
            return None;
        }
        let pos = Position::new(self.next / self.width, self.next % self.width);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.total - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions {}
