//! Damage calculation and application.

use crate::config::BattleConfig;

/// Multiplier (in percent) for attacks that are not scaled by difficulty.
pub const UNSCALED_PERCENT: u32 = 100;

/// Calculate damage for one move.
///
/// # Formula
///
/// ```text
/// raw    = power + roll          (roll ∈ [0, DAMAGE_ROLL_MAX])
/// damage = floor(raw × percent / 100)
/// ```
///
/// The player's attacks use [`UNSCALED_PERCENT`]; enemy attacks use the
/// session difficulty's percent.
pub fn calculate_damage(power: u32, roll: u32, multiplier_percent: u32) -> u32 {
    let raw = u64::from(power) + u64::from(roll.min(BattleConfig::DAMAGE_ROLL_MAX));
    let scaled = raw * u64::from(multiplier_percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Inclusive `(min, max)` damage a move can deal at the given multiplier.
pub fn damage_bounds(power: u32, multiplier_percent: u32) -> (u32, u32) {
    (
        calculate_damage(power, 0, multiplier_percent),
        calculate_damage(power, BattleConfig::DAMAGE_ROLL_MAX, multiplier_percent),
    )
}

/// Apply damage to current health.
///
/// Returns the new health, clamped to `[0, MAX_HEALTH]`.
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health
        .saturating_sub(damage)
        .min(BattleConfig::MAX_HEALTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;

    #[test]
    fn player_damage_is_power_plus_roll() {
        assert_eq!(calculate_damage(10, 5, UNSCALED_PERCENT), 15);
        assert_eq!(damage_bounds(10, UNSCALED_PERCENT), (10, 19));
    }

    #[test]
    fn enemy_damage_is_floored_after_scaling() {
        let easy = Difficulty::Easy.multiplier_percent();
        let hard = Difficulty::Hard.multiplier_percent();

        // (15 + 0) × 0.7 = 10.5 → 10
        assert_eq!(calculate_damage(15, 0, easy), 10);
        // (18 + 9) × 1.5 = 40.5 → 40
        assert_eq!(calculate_damage(18, 9, hard), 40);
        assert_eq!(damage_bounds(20, easy), (14, 20));
    }

    #[test]
    fn roll_above_maximum_is_capped() {
        assert_eq!(calculate_damage(10, 50, UNSCALED_PERCENT), 19);
    }

    #[test]
    fn damage_clamps_at_zero() {
        assert_eq!(apply_damage(8, 12), 0);
        assert_eq!(apply_damage(100, 15), 85);
        assert_eq!(apply_damage(100, 0), 100);
    }
}
