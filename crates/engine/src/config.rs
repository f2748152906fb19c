use serde::{Deserialize, Serialize};

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

/// Which pairs of cells a player may try to swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapRule {
    /// Any two distinct cells sharing a row or a column.
    Aligned,
    /// Orthogonal neighbours only.
    Adjacent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub min_run: usize,
    pub swap_rule: SwapRule,
    /// Distinct piece values assumed when the source can't report its own.
    pub fallback_cardinality: usize,
}

impl EngineConfig {
    pub fn aligned() -> Self {
        Self {
            min_run: MIN_RUN,
            swap_rule: SwapRule::Aligned,
            fallback_cardinality: 8,
        }
    }

    /// Neighbour-only swaps, as most match-three games play.
    pub fn classic() -> Self {
        Self {
            swap_rule: SwapRule::Adjacent,
            ..Self::aligned()
        }
    }

    pub fn with_min_run(mut self, min_run: usize) -> Self {
        self.min_run = min_run;
        self
    }

    /// Run length actually enforced; never below three.
    #[inline]
    pub fn effective_min_run(&self) -> usize {
        self.min_run.max(MIN_RUN)
    }

    /// Upper bound on cascade passes for a board of `cells` cells.
    pub fn cascade_limit(&self, cells: usize, cardinality: Option<usize>) -> usize {
        let cardinality = cardinality.unwrap_or(self.fallback_cardinality).max(1);
        cells.saturating_mul(cardinality).max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::aligned()
    }
}
