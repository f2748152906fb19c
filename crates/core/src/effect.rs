//! Observable outcomes of resolving a move.

use serde::{Deserialize, Serialize};

use crate::{Board, Orientation, Position};

/// One qualifying run: the matched value and its cells, sorted row-major.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Match<T> {
    pub matched: T,
    pub orientation: Orientation,
    pub positions: Vec<Position>,
}

impl<T> Match<T> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    /// First cell of the run (leftmost or topmost).
    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Effect<T> {
    MatchFound(Match<T>),
    /// Snapshot of the board right after a refill pass.
    BoardRefilled(Board<T>),
}

impl<T> Effect<T> {
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Effect::MatchFound(m) => Some(m),
            Effect::BoardRefilled(_) => None,
        }
    }

    pub fn as_refill(&self) -> Option<&Board<T>> {
        match self {
            Effect::MatchFound(_) => None,
            Effect::BoardRefilled(b) => Some(b),
        }
    }
}

/// Result of a move: the board to continue from and the ordered effect log.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveOutcome<T> {
    pub board: Board<T>,
    pub effects: Vec<Effect<T>>,
}

impl<T> MoveOutcome<T> {
    /// Outcome of a rejected move: the board unchanged, no effects.
    pub fn rejected(board: Board<T>) -> Self {
        Self {
            board,
            effects: Vec::new(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> + '_ {
        self.effects.iter().filter_map(Effect::as_match)
    }

    pub fn refills(&self) -> impl Iterator<Item = &Board<T>> + '_ {
        self.effects.iter().filter_map(Effect::as_refill)
    }
}
