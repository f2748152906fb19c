//! match3-engine - swap validation, match detection and cascade resolution.
//!
//! Every operation takes a [`Board`] by reference and returns new values;
//! the caller's board is never mutated. Piece values only need `PartialEq`
//! and `Clone`.

pub mod apply;
pub mod bag;
pub mod config;
pub mod detect;
pub mod error;
pub mod gravity;
pub mod movegen;

pub use apply::{apply_move, apply_move_with, can_move};
pub use bag::{CycleSource, ScriptedSource, XorShiftSource};
pub use config::{EngineConfig, SwapRule, MIN_RUN};
pub use detect::{find_matches, matches_through};
pub use error::EngineError;
pub use movegen::{candidate_swaps, has_legal_move, legal_moves};

pub use match3_core::{
    Board, BoardError, Effect, Grid, Match, MoveOutcome, Orientation, PieceSource, Position,
};

/// Fill a new `width` x `height` board from `source`, row-major.
pub fn create_board<T, S>(
    source: &mut S,
    width: usize,
    height: usize,
) -> Result<Board<T>, EngineError>
where
    S: PieceSource<T> + ?Sized,
{
    Ok(Board::create(source, width, height)?)
}

/// The piece at `pos`, or `OutOfBounds`.
pub fn piece_at<T>(board: &Board<T>, pos: Position) -> Result<&T, EngineError> {
    Ok(board.piece_at(pos)?)
}

/// Every position on `board`, row-major.
pub fn all_positions<T>(board: &Board<T>) -> Vec<Position> {
    board.positions().collect()
}
