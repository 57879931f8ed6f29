//! Deterministic battle rules shared across clients.
//!
//! `battle-core` defines the canonical rules of a turn-based monster battle
//! (combatants, damage formulas, phase machine) and exposes pure APIs that
//! hosts drive synchronously. All state mutation flows through
//! [`engine::BattleEngine`]; randomness is injected through
//! [`env::RngOracle`], so a battle replays identically from its seed.
pub mod combat;
pub mod config;
#[cfg(feature = "serde")]
mod de;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use combat::{
    AttackResult, UNSCALED_PERCENT, apply_damage, calculate_damage, damage_bounds, resolve_attack,
};
pub use config::{BattleConfig, Difficulty};
pub use engine::{BattleAction, BattleEngine, BattleError, BattleEvent};
pub use env::{BattleEnv, FixedRng, PcgRng, RngOracle, RollKind, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BattleSnapshot, BattleState, Combatant, CombatantError, CombatantSpec, ElementType, Move,
    MoveSet, Phase, Side,
};
