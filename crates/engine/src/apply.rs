use match3_core::{Board, Effect, MoveOutcome, PieceSource, Position};
use tracing::{debug, error, instrument, trace};

use crate::config::{EngineConfig, SwapRule};
use crate::detect::{find_matches, has_match_through};
use crate::error::EngineError;
use crate::gravity::{clear_matches, collapse, refill};

/// Whether swapping `a` and `b` is a legal move.
///
/// False for out-of-bounds or identical positions, for pairs the swap rule
/// doesn't allow, and for swaps after which neither cell sits on a run of at
/// least `min_run` pieces. Symmetric in `a` and `b`. Never touches `board`.
pub fn can_move<T>(board: &Board<T>, a: Position, b: Position, config: &EngineConfig) -> bool
where
    T: PartialEq + Clone,
{
    if a == b || !board.contains(a) || !board.contains(b) {
        return false;
    }
    let shape_ok = match config.swap_rule {
        SwapRule::Aligned => a.is_aligned(b),
        SwapRule::Adjacent => a.is_adjacent(b),
    };
    if !shape_ok {
        return false;
    }

    let mut grid = board.grid().clone();
    if grid.swap(a, b).is_err() {
        return false;
    }
    let min_run = config.effective_min_run();
    has_match_through(&grid, a, min_run) || has_match_through(&grid, b, min_run)
}

/// Apply a swap and resolve the cascade it triggers.
///
/// An illegal swap is not an error: the outcome carries an unchanged copy of
/// `board` and no effects.
pub fn apply_move<T, S>(
    board: &Board<T>,
    a: Position,
    b: Position,
    source: &mut S,
    config: &EngineConfig,
) -> Result<MoveOutcome<T>, EngineError>
where
    T: PartialEq + Clone,
    S: PieceSource<T> + ?Sized,
{
    apply_move_with(board, a, b, source, config, |_| {})
}

/// [`apply_move`], also handing each effect to `observer` as it's logged.
#[instrument(level = "debug", skip_all, fields(a = %a, b = %b))]
pub fn apply_move_with<T, S, F>(
    board: &Board<T>,
    a: Position,
    b: Position,
    source: &mut S,
    config: &EngineConfig,
    mut observer: F,
) -> Result<MoveOutcome<T>, EngineError>
where
    T: PartialEq + Clone,
    S: PieceSource<T> + ?Sized,
    F: FnMut(&Effect<T>),
{
    if !can_move(board, a, b, config) {
        debug!("move rejected");
        return Ok(MoveOutcome::rejected(board.clone()));
    }

    let mut grid = board.grid().clone();
    grid.swap(a, b)?;

    let min_run = config.effective_min_run();
    let limit = config.cascade_limit(grid.cell_count(), source.cardinality());
    let mut effects = Vec::new();
    let mut log = |effect: Effect<T>| {
        observer(&effect);
        effects.push(effect);
    };

    let mut passes = 0;
    loop {
        let matches = find_matches(&grid, min_run);
        if matches.is_empty() {
            break;
        }
        if passes == limit {
            error!(limit, "cascade overflow, abandoning move");
            return Err(EngineError::CascadeOverflow { limit });
        }
        passes += 1;

        let cleared = clear_matches(&mut grid, &matches)?;
        trace!(pass = passes, matches = matches.len(), cleared, "cascade pass");
        for m in matches {
            log(Effect::MatchFound(m));
        }

        collapse(&mut grid)?;
        refill(&mut grid, source)?;
        log(Effect::BoardRefilled(Board::from_grid(grid.clone())?));
    }

    debug!(passes, effects = effects.len(), "move resolved");
    Ok(MoveOutcome {
        board: Board::from_grid(grid)?,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::{CycleSource, ScriptedSource};

    fn board(rows: &[&str]) -> Board<char> {
        Board::from_rows(rows.iter().map(|r| r.chars())).unwrap()
    }

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_same_position_never_moves() {
        let b = board(&["AAB", "CDA"]);
        let config = EngineConfig::default();
        for pos in b.positions() {
            assert!(!can_move(&b, pos, pos, &config));
        }
    }

    #[test]
    fn test_out_of_bounds_fails_closed() {
        let b = board(&["AAB", "CDA"]);
        assert!(!can_move(&b, p(0, 2), p(0, 3), &EngineConfig::default()));
        assert!(!can_move(&b, p(9, 9), p(0, 0), &EngineConfig::default()));
    }

    #[test]
    fn test_diagonal_rejected() {
        // swapping (0,2) and (1,1) would complete AAA in row 0
        let b = board(&["AAB", "CAD"]);
        assert!(!can_move(&b, p(0, 2), p(1, 1), &EngineConfig::default()));
    }

    #[test]
    fn test_aligned_vs_adjacent() {
        let b = board(&["AABCA"]);
        let aligned = EngineConfig::aligned();
        let classic = EngineConfig::classic();
        assert!(can_move(&b, p(0, 2), p(0, 4), &aligned));
        assert!(!can_move(&b, p(0, 2), p(0, 4), &classic));
    }

    #[test]
    fn test_must_touch_match() {
        // row 0 already matches, but no run passes through the swapped cells
        let b = board(&["AAAB", "CDEF", "GHIJ"]);
        assert!(!can_move(&b, p(1, 3), p(2, 3), &EngineConfig::default()));
    }

    #[test]
    fn test_rejected_move_returns_same_board() {
        let b = board(&["ABA", "ABA", "BAB"]);
        let mut source = CycleSource::new(&['C']).unwrap();
        let out = apply_move(&b, p(2, 0), p(1, 0), &mut source, &EngineConfig::default()).unwrap();
        assert!(out.effects.is_empty());
        assert_eq!(out.board, b);
        assert_eq!(*source.peek(), 'C');
    }

    #[test]
    fn test_single_match_then_refill() {
        let b = board(&["AABA"]);
        let mut source = CycleSource::new(&['X', 'Y', 'Z']).unwrap();
        let out = apply_move(&b, p(0, 2), p(0, 3), &mut source, &EngineConfig::default()).unwrap();

        assert_eq!(out.effects.len(), 2);
        let m = out.effects[0].as_match().unwrap();
        assert_eq!(m.matched, 'A');
        assert_eq!(m.positions, vec![p(0, 0), p(0, 1), p(0, 2)]);
        let refilled = out.effects[1].as_refill().unwrap();
        assert_eq!(refilled.row(0).copied().collect::<String>(), "XYZB");
        assert_eq!(&out.board, refilled);
    }

    #[test]
    fn test_gravity_before_refill() {
        // clearing row 2 drops rows 0-1 down by one
        let b = board(&["CDE", "BFG", "AAH", "IJA"]);
        let mut source = CycleSource::new(&['x', 'y', 'z']).unwrap();
        let out = apply_move(&b, p(2, 2), p(3, 2), &mut source, &EngineConfig::default()).unwrap();

        let m = out.effects[0].as_match().unwrap();
        assert_eq!(m.positions, vec![p(2, 0), p(2, 1), p(2, 2)]);
        let rows: Vec<String> = (0..4)
            .map(|r| out.board.row(r).copied().collect())
            .collect();
        assert_eq!(rows, vec!["xyz", "CDE", "BFG", "IJH"]);
    }

    #[test]
    fn test_cascade_runs_to_fixed_point() {
        // the scripted refill after the first pass lands QQQ in row 0
        let b = board(&["CDE", "AAF", "GHA"]);
        let fallback = CycleSource::new(&['1', '2', '3']).unwrap();
        let mut source = ScriptedSource::new(['Q', 'Q', 'Q'], fallback);
        let out = apply_move(&b, p(1, 2), p(2, 2), &mut source, &EngineConfig::default()).unwrap();

        assert_eq!(out.matches().count(), 2);
        assert_eq!(out.refills().count(), 2);
        assert!(matches!(out.effects[0], Effect::MatchFound(_)));
        assert!(matches!(out.effects[1], Effect::BoardRefilled(_)));
        assert!(matches!(out.effects[2], Effect::MatchFound(_)));
        assert!(matches!(out.effects[3], Effect::BoardRefilled(_)));
        assert_eq!(out.effects[2].as_match().unwrap().matched, 'Q');
        assert!(find_matches(out.board.grid(), 3).is_empty());
    }

    #[test]
    fn test_degenerate_source_overflows() {
        let b = board(&["AAB", "CDA", "EFG"]);
        let mut always_a = || 'A';
        let config = EngineConfig {
            fallback_cardinality: 1,
            ..EngineConfig::default()
        };
        let err = apply_move(&b, p(0, 2), p(1, 2), &mut always_a, &config).unwrap_err();
        assert_eq!(err, EngineError::CascadeOverflow { limit: 9 });
    }

    #[test]
    fn test_observer_sees_effects_in_order() {
        let b = board(&["AABA"]);
        let mut source = CycleSource::new(&['X', 'Y', 'Z']).unwrap();
        let mut seen = Vec::new();
        let out = apply_move_with(
            &b,
            p(0, 2),
            p(0, 3),
            &mut source,
            &EngineConfig::default(),
            |e| seen.push(e.clone()),
        )
        .unwrap();
        assert_eq!(seen, out.effects);
    }

    #[test]
    fn test_caller_board_untouched() {
        let b = board(&["AABA"]);
        let before = b.clone();
        let mut source = CycleSource::new(&['X', 'Y', 'Z']).unwrap();
        let _ = apply_move(&b, p(0, 2), p(0, 3), &mut source, &EngineConfig::default()).unwrap();
        assert_eq!(b, before);
    }
}
