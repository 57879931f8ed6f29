//! Attack resolution against a defender's health.

use super::damage::{apply_damage, calculate_damage};

/// Result of resolving one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Damage dealt after scaling.
    pub damage: u32,
    /// Defender health before the hit.
    pub health_before: u32,
    /// Defender health after the hit (clamped to 0).
    pub health_after: u32,
}

impl AttackResult {
    /// True when this hit brought the defender to 0.
    pub fn is_knockout(&self) -> bool {
        self.health_after == 0
    }
}

/// Resolve a complete attack (damage calculation + health reduction).
///
/// # Arguments
///
/// * `power` - Base power of the move
/// * `roll` - Random damage bonus (0-9)
/// * `multiplier_percent` - Damage multiplier in percent
/// * `defender_health` - Defender's current health
pub fn resolve_attack(
    power: u32,
    roll: u32,
    multiplier_percent: u32,
    defender_health: u32,
) -> AttackResult {
    let damage = calculate_damage(power, roll, multiplier_percent);

    AttackResult {
        damage,
        health_before: defender_health,
        health_after: apply_damage(defender_health, damage),
    }
}
