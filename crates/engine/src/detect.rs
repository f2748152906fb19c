//! match detection - maximal horizontal/vertical runs of equal pieces
//!
//! A physical run is reported once no matter its length. A piece sitting on
//! both a horizontal and a vertical run shows up in two matches.

use match3_core::{Grid, Match, Orientation, Position};

/// Every maximal run of at least `min_run` equal pieces.
///
/// Ordered by the run's first cell (row-major); a horizontal run sorts
/// before a vertical one starting on the same cell. Empty cells break runs.
pub fn find_matches<T>(grid: &Grid<T>, min_run: usize) -> Vec<Match<T>>
where
    T: PartialEq + Clone,
{
    let mut matches = Vec::new();

    for row in 0..grid.height() {
        scan_line(grid, Position::new(row, 0), Orientation::Horizontal, min_run, &mut matches);
    }
    for col in 0..grid.width() {
        scan_line(grid, Position::new(0, col), Orientation::Vertical, min_run, &mut matches);
    }

    // stable: keeps horizontal first on a shared start cell
    matches.sort_by_key(|m| (m.positions[0], m.orientation));
    matches
}

/// Matches whose run passes through `pos`: at most one per orientation,
/// horizontal first.
pub fn matches_through<T>(grid: &Grid<T>, pos: Position, min_run: usize) -> Vec<Match<T>>
where
    T: PartialEq + Clone,
{
    let Some(piece) = grid.peek(pos) else {
        return Vec::new();
    };

    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .filter_map(|orientation| {
            let start = run_start(grid, pos, orientation, piece);
            let len = run_len(grid, start, orientation, piece);
            (len >= min_run.max(1)).then(|| build(piece, start, orientation, len))
        })
        .collect()
}

/// True if any run through `pos` qualifies.
pub fn has_match_through<T: PartialEq>(grid: &Grid<T>, pos: Position, min_run: usize) -> bool {
    let Some(piece) = grid.peek(pos) else {
        return false;
    };
    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .any(|orientation| {
            let start = run_start(grid, pos, orientation, piece);
            run_len(grid, start, orientation, piece) >= min_run.max(1)
        })
}

fn scan_line<T>(
    grid: &Grid<T>,
    origin: Position,
    orientation: Orientation,
    min_run: usize,
    out: &mut Vec<Match<T>>,
) where
    T: PartialEq + Clone,
{
    let line_len = match orientation {
        Orientation::Horizontal => grid.width(),
        Orientation::Vertical => grid.height(),
    };

    let mut i = 0;
    while i < line_len {
        let start = origin.step(orientation, i);
        let Some(piece) = grid.peek(start) else {
            i += 1;
            continue;
        };
        let len = run_len(grid, start, orientation, piece);
        if len >= min_run {
            out.push(build(piece, start, orientation, len));
        }
        i += len;
    }
}

/// Walk back from `pos` to the first cell of its run.
fn run_start<T: PartialEq>(
    grid: &Grid<T>,
    pos: Position,
    orientation: Orientation,
    piece: &T,
) -> Position {
    let mut start = pos;
    loop {
        let prev = match orientation {
            Orientation::Horizontal => start.col.checked_sub(1).map(|c| Position::new(start.row, c)),
            Orientation::Vertical => start.row.checked_sub(1).map(|r| Position::new(r, start.col)),
        };
        match prev {
            Some(p) if grid.peek(p) == Some(piece) => start = p,
            _ => return start,
        }
    }
}

#[inline]
fn run_len<T: PartialEq>(
    grid: &Grid<T>,
    start: Position,
    orientation: Orientation,
    piece: &T,
) -> usize {
    let mut len = 0;
    while grid.peek(start.step(orientation, len)) == Some(piece) {
        len += 1;
    }
    len
}

fn build<T: Clone>(piece: &T, start: Position, orientation: Orientation, len: usize) -> Match<T> {
    Match {
        matched: piece.clone(),
        orientation,
        positions: (0..len).map(|n| start.step(orientation, n)).collect(),
    }
}
