//! Ordered events emitted by every engine transition.
//!
//! A resolve call returns its events in the order a presentation layer should
//! play them: announcement, damage narration, health update, then the phase
//! change. Timing between events is entirely up to the consumer.

use crate::state::{ElementType, Phase, Side};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// The state machine moved from one phase to the next.
    PhaseChanged { from: Phase, to: Phase },

    /// A combatant started using a move (attack lunge).
    MoveAnnounced {
        side: Side,
        attacker: String,
        move_name: String,
        element: ElementType,
    },

    /// New narration text; also stored as the session's latest narration.
    Narration(String),

    /// Damage landed on `target` (impact + health bar update).
    DamageDealt {
        target: Side,
        damage: u32,
        health_before: u32,
        health_after: u32,
    },

    /// `side` reached 0 health.
    Fainted { side: Side },

    /// Terminal event of a battle.
    BattleEnded { winner: Side },

    /// Session reinitialized for a new topic.
    BattleReset { topic: String, epoch: u64 },
}

impl BattleEvent {
    /// Narration carried by this event, if any.
    pub fn narration(&self) -> Option<&str> {
        match self {
            Self::Narration(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for the event that closes a battle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::BattleEnded { .. })
    }
}
