use crate::Position;

/// Errors raised by board construction and bounds-checked access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    #[error("board dimensions {width}x{height} overflow the addressable cell count")]
    TooLarge { width: usize, height: usize },

    #[error("row {row} has {found} piece(s), expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has {empty} empty cell(s)")]
    Incomplete { empty: usize },
}
