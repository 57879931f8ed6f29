/// Battle difficulty selected once when a session is created.
///
/// Difficulty only scales damage inflicted *by the enemy*. The player's own
/// attacks are never scaled.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::VariantNames,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Parsed without regard to case, so config files may write `Hard` or `hard`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Difficulty {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::de::from_name(
            deserializer,
            "Difficulty",
            <Self as strum::VariantNames>::VARIANTS,
        )
    }
}

impl Difficulty {
    /// Enemy damage multiplier expressed in percent.
    ///
    /// Integer percent keeps the floor in `calculate_damage` exact:
    /// easy = 0.7, medium = 1.0, hard = 1.5.
    pub const fn multiplier_percent(self) -> u32 {
        match self {
            Self::Easy => 70,
            Self::Medium => 100,
            Self::Hard => 150,
        }
    }

    /// Enemy damage multiplier as a display value.
    pub fn multiplier(self) -> f32 {
        self.multiplier_percent() as f32 / 100.0
    }

    /// Capitalized label used by presentation layers ("Easy", "Medium", "Hard").
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Difficulty applied to enemy damage for the whole session.
    pub difficulty: Difficulty,

    /// Fixed game seed. `None` means the host draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of moves a combatant can know.
    pub const MAX_MOVES: usize = 4;

    // ===== rules =====
    /// Health every combatant starts (and resets) with.
    pub const MAX_HEALTH: u32 = 100;
    /// Upper bound (inclusive) of the random bonus added to a move's power.
    pub const DAMAGE_ROLL_MAX: u32 = 9;

    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_multipliers_are_fixed() {
        assert_eq!(Difficulty::Easy.multiplier_percent(), 70);
        assert_eq!(Difficulty::Medium.multiplier_percent(), 100);
        assert_eq!(Difficulty::Hard.multiplier_percent(), 150);
        assert!((Difficulty::Easy.multiplier() - 0.7).abs() < f32::EPSILON);
        assert!((Difficulty::Hard.multiplier() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }
}
