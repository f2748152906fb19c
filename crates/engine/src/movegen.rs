//! Legal move enumeration, used for hints and dead-board detection.
//! Each candidate swap is simulated on its own copy, in parallel.

use match3_core::{Board, Position, Positions};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::apply::can_move;
use crate::config::{EngineConfig, SwapRule};

/// Every pair the swap rule allows, `a < b`, sorted row-major by `(a, b)`.
/// No simulation happens here.
pub fn candidate_swaps(width: usize, height: usize, rule: SwapRule) -> Vec<(Position, Position)> {
    let mut out = Vec::new();
    for a in Positions::new(width, height) {
        match rule {
            SwapRule::Adjacent => {
                if a.col + 1 < width {
                    out.push((a, Position::new(a.row, a.col + 1)));
                }
                if a.row + 1 < height {
                    out.push((a, Position::new(a.row + 1, a.col)));
                }
            }
            SwapRule::Aligned => {
                out.extend((a.col + 1..width).map(|col| (a, Position::new(a.row, col))));
                out.extend((a.row + 1..height).map(|row| (a, Position::new(row, a.col))));
            }
        }
    }
    out
}

/// All legal swaps on `board`, in the same order as [`candidate_swaps`].
#[instrument(level = "debug", skip_all, fields(width = board.width(), height = board.height()))]
pub fn legal_moves<T>(board: &Board<T>, config: &EngineConfig) -> Vec<(Position, Position)>
where
    T: PartialEq + Clone + Sync,
{
    let moves: Vec<_> = candidate_swaps(board.width(), board.height(), config.swap_rule)
        .into_par_iter()
        .filter(|&(a, b)| can_move(board, a, b, config))
        .collect();
    debug!(count = moves.len(), "legal moves");
    moves
}

/// Short-circuiting check for at least one legal swap.
pub fn has_legal_move<T>(board: &Board<T>, config: &EngineConfig) -> bool
where
    T: PartialEq + Clone + Sync,
{
    candidate_swaps(board.width(), board.height(), config.swap_rule)
        .into_par_iter()
        .any(|(a, b)| can_move(board, a, b, config))
}
