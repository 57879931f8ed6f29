//! Combatants and the moves they can use.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Elemental tag carried by every move.
///
/// The tag is cosmetic for damage purposes (there is no type chart); the
/// presentation layer uses it to pick effect colors and icons.
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
pub enum ElementType {
    #[default]
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Parsed without regard to case, so roster files may write `Water` or `water`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ElementType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::de::from_name(
            deserializer,
            "ElementType",
            <Self as strum::VariantNames>::VARIANTS,
        )
    }
}

/// A named attack with an elemental tag and base power.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub element: ElementType,
    pub power: u32,
}

impl Move {
    pub fn new(name: impl Into<String>, element: ElementType, power: u32) -> Self {
        Self {
            name: name.into(),
            element,
            power,
        }
    }
}

/// Bounded move list owned by a combatant.
pub type MoveSet = ArrayVec<Move, { BattleConfig::MAX_MOVES }>;

/// Errors raised when a combatant definition breaks an engine invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error("combatant '{name}' has no moves")]
    NoMoves { name: String },

    #[error("combatant '{name}' has {count} moves (maximum is {max})", max = BattleConfig::MAX_MOVES)]
    TooManyMoves { name: String, count: usize },

    #[error("combatant '{name}' must be at least level 1")]
    InvalidLevel { name: String },
}

impl crate::error::GameError for CombatantError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoMoves { .. } => "COMBATANT_NO_MOVES",
            Self::TooManyMoves { .. } => "COMBATANT_TOO_MANY_MOVES",
            Self::InvalidLevel { .. } => "COMBATANT_INVALID_LEVEL",
        }
    }
}

/// Serializable definition of a combatant, as stored in roster files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub level: u32,
    pub moves: Vec<Move>,
}

/// One side of a battle.
///
/// Health is private so every write goes through [`Combatant::set_health`],
/// which keeps it inside `[0, MAX_HEALTH]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combatant {
    name: String,
    level: u32,
    health: u32,
    moves: MoveSet,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(
        name: impl Into<String>,
        level: u32,
        moves: impl IntoIterator<Item = Move>,
    ) -> Result<Self, CombatantError> {
        let name = name.into();

        if level == 0 {
            return Err(CombatantError::InvalidLevel { name });
        }

        let moves: Vec<Move> = moves.into_iter().collect();
        if moves.is_empty() {
            return Err(CombatantError::NoMoves { name });
        }
        if moves.len() > BattleConfig::MAX_MOVES {
            return Err(CombatantError::TooManyMoves {
                name,
                count: moves.len(),
            });
        }

        Ok(Self {
            name,
            level,
            health: BattleConfig::MAX_HEALTH,
            moves: moves.into_iter().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Sets health, clamped to `[0, MAX_HEALTH]`.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(BattleConfig::MAX_HEALTH);
    }

    /// Restores full health.
    pub fn restore(&mut self) {
        self.health = BattleConfig::MAX_HEALTH;
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }
}

impl TryFrom<CombatantSpec> for Combatant {
    type Error = CombatantError;

    fn try_from(spec: CombatantSpec) -> Result<Self, Self::Error> {
        Self::new(spec.name, spec.level, spec.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tackle() -> Move {
        Move::new("Tackle", ElementType::Normal, 10)
    }

    #[test]
    fn new_combatant_starts_at_full_health() {
        let monster = Combatant::new("Oshawott", 7, [tackle()]).unwrap();
        assert_eq!(monster.health(), BattleConfig::MAX_HEALTH);
        assert!(!monster.is_fainted());
    }

    #[test]
    fn health_is_clamped_to_maximum() {
        let mut monster = Combatant::new("Oshawott", 7, [tackle()]).unwrap();
        monster.set_health(250);
        assert_eq!(monster.health(), 100);
        monster.set_health(0);
        assert!(monster.is_fainted());
        monster.restore();
        assert_eq!(monster.health(), 100);
    }

    #[test]
    fn rejects_invalid_definitions() {
        assert_eq!(
            Combatant::new("Empty", 1, []),
            Err(CombatantError::NoMoves {
                name: "Empty".into()
            })
        );
        assert_eq!(
            Combatant::new("Zero", 0, [tackle()]),
            Err(CombatantError::InvalidLevel {
                name: "Zero".into()
            })
        );
        let five = std::iter::repeat_n(tackle(), 5);
        assert!(matches!(
            Combatant::new("Greedy", 3, five),
            Err(CombatantError::TooManyMoves { count: 5, .. })
        ));
    }

    #[test]
    fn element_parses_capitalized_names() {
        assert_eq!("Water".parse::<ElementType>(), Ok(ElementType::Water));
        assert_eq!("PSYCHIC".parse::<ElementType>(), Ok(ElementType::Psychic));
        assert!("plasma".parse::<ElementType>().is_err());
        assert_eq!(ElementType::Fairy.as_ref(), "fairy");
    }
}
