//! Read-only collaborators the engine consults while resolving moves.
//!
//! Today the only oracle is randomness. [`BattleEnv`] bundles it so the engine
//! signature stays stable if more read-only inputs are added.
mod rng;

pub use rng::{FixedRng, PcgRng, RngOracle, RollKind, compute_seed};

/// Aggregates read-only oracles required by the engine.
#[derive(Clone, Copy)]
pub struct BattleEnv<'a> {
    rng: &'a dyn RngOracle,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rng: &'a dyn RngOracle) -> Self {
        Self { rng }
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for BattleEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BattleEnv").finish_non_exhaustive()
    }
}
