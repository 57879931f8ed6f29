//! Built-in monsters used when no roster file is configured.

use battle_core::{Combatant, CombatantError, CombatantSpec, ElementType, Move};

/// The two monsters that meet in a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub player: CombatantSpec,
    pub enemy: CombatantSpec,
}

impl Roster {
    /// Psyduck (player) against Oshawott (enemy).
    pub fn builtin() -> Self {
        Self {
            player: CombatantSpec {
                name: "Psyduck".into(),
                level: 5,
                moves: vec![
                    Move::new("Scratch", ElementType::Normal, 10),
                    Move::new("Water Gun", ElementType::Water, 15),
                    Move::new("Confusion", ElementType::Psychic, 20),
                    Move::new("Headache", ElementType::Psychic, 25),
                ],
            },
            enemy: CombatantSpec {
                name: "Oshawott".into(),
                level: 7,
                moves: vec![
                    Move::new("Tackle", ElementType::Normal, 10),
                    Move::new("Water Gun", ElementType::Water, 15),
                    Move::new("Razor Shell", ElementType::Water, 20),
                    Move::new("Aqua Jet", ElementType::Water, 18),
                ],
            },
        }
    }

    /// Validates both definitions and builds full-health combatants.
    pub fn into_combatants(self) -> Result<(Combatant, Combatant), CombatantError> {
        Ok((self.player.try_into()?, self.enemy.try_into()?))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}
