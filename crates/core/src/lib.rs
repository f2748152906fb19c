//! match3 core crate - value types for the match-three board engine.

mod board;
mod effect;
mod error;
mod grid;
mod position;
mod source;

pub use board::Board;
pub use effect::{Effect, Match, MoveOutcome};
pub use error::BoardError;
pub use grid::{Grid, Positions};
pub use position::{Orientation, Position};
pub use source::PieceSource;
