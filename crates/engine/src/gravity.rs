//! Removal, gravity and refill for one cascade pass.
//!
//! Gravity pulls toward increasing row index; refill fills the holes left at
//! the top of each column.

use match3_core::{BoardError, Grid, Match, PieceSource, Position};
use rustc_hash::FxHashSet;

/// Empty every cell belonging to any of `matches`. Cells shared by crossing
/// runs are cleared once. Returns the number of cells cleared.
pub fn clear_matches<T>(grid: &mut Grid<T>, matches: &[Match<T>]) -> Result<usize, BoardError> {
    let cells: FxHashSet<Position> = matches
        .iter()
        .flat_map(|m| m.positions.iter().copied())
        .collect();

    let mut cleared = 0;
    for pos in cells {
        if grid.take(pos)?.is_some() {
            cleared += 1;
        }
    }
    Ok(cleared)
}

/// Compact each column's pieces to the bottom, keeping their order.
pub fn collapse<T>(grid: &mut Grid<T>) -> Result<(), BoardError> {
    for col in 0..grid.width() {
        let mut write = grid.height();
        for row in (0..grid.height()).rev() {
            let Some(piece) = grid.take(Position::new(row, col))? else {
                continue;
            };
            write -= 1;
            grid.set(Position::new(write, col), Some(piece))?;
        }
    }
    Ok(())
}

/// Fill every empty cell from `source`, top row first, left to right.
/// Returns the number of pieces drawn.
pub fn refill<T, S>(grid: &mut Grid<T>, source: &mut S) -> Result<usize, BoardError>
where
    S: PieceSource<T> + ?Sized,
{
    let mut drawn = 0;
    for pos in grid.positions() {
        if grid.get(pos)?.is_none() {
            grid.set(pos, Some(source.next_piece()))?;
            drawn += 1;
        }
    }
    Ok(drawn)
}
