use match3_core::BoardError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The cascade kept finding matches past its safety bound. Points at a
    /// degenerate piece source; the move is abandoned.
    #[error("cascade did not settle within {limit} passes")]
    CascadeOverflow { limit: usize },
}
