//! Combat resolution system.
//!
//! Pure, side-effect free functions for computing and applying damage. The
//! engine rolls the random bonus and picks the multiplier; everything here is
//! plain arithmetic so it can be tested exhaustively.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Damage calculation + health reduction
//! - `calculate_damage`: `floor((power + roll) × percent / 100)`
//! - `apply_damage`: Health reduction (clamped to 0)

pub mod damage;
pub mod result;

pub use damage::{UNSCALED_PERCENT, apply_damage, calculate_damage, damage_bounds};
pub use result::{AttackResult, resolve_attack};
