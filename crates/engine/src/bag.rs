//! Concrete piece sources.

use std::collections::VecDeque;

use match3_core::PieceSource;

/// Cycles through a fixed sequence forever.
#[derive(Clone, Debug)]
pub struct CycleSource<T> {
    pieces: Vec<T>,
    index: usize,
}

impl<T: Clone> CycleSource<T> {
    /// `None` for an empty sequence, which could never produce a piece.
    pub fn new(pieces: &[T]) -> Option<Self> {
        if pieces.is_empty() {
            return None;
        }
        Some(Self {
            pieces: pieces.to_vec(),
            index: 0,
        })
    }

    pub fn peek(&self) -> &T {
        &self.pieces[self.index]
    }
}

impl<T: Clone> PieceSource<T> for CycleSource<T> {
    fn next_piece(&mut self) -> T {
        let piece = self.pieces[self.index].clone();
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }

    fn cardinality(&self) -> Option<usize> {
        Some(self.pieces.len())
    }
}

/// Yields a scripted queue first, then falls back to cycling a palette.
#[derive(Clone, Debug)]
pub struct ScriptedSource<T> {
    script: VecDeque<T>,
    fallback: CycleSource<T>,
}

impl<T: Clone> ScriptedSource<T> {
    pub fn new(script: impl IntoIterator<Item = T>, fallback: CycleSource<T>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<T: Clone> PieceSource<T> for ScriptedSource<T> {
    fn next_piece(&mut self) -> T {
        match self.script.pop_front() {
            Some(piece) => piece,
            None => self.fallback.next_piece(),
        }
    }
}

/// Seeded pseudo-random choice over a palette (xorshift64).
#[derive(Clone, Debug)]
pub struct XorShiftSource<T> {
    palette: Vec<T>,
    state: u64,
}

impl<T: Clone> XorShiftSource<T> {
    pub fn new(palette: &[T], seed: u64) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        Some(Self {
            palette: palette.to_vec(),
            // xorshift is stuck at zero
            state: if seed == 0 { 0x9e3779b97f4a7c15 } else { seed },
        })
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl<T: Clone> PieceSource<T> for XorShiftSource<T> {
    fn next_piece(&mut self) -> T {
        let idx = (self.next_u64() % self.palette.len() as u64) as usize;
        self.palette[idx].clone()
    }

    fn cardinality(&self) -> Option<usize> {
        Some(self.palette.len())
    }
}
