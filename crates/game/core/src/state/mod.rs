//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe both combatants, turn
//! ownership, and the battle phase. Hosts hold a [`BattleState`] by value and
//! mutate it exclusively through [`crate::engine::BattleEngine`].
pub mod combatant;

pub use combatant::{
    Combatant, CombatantError, CombatantSpec, ElementType, Move, MoveSet,
};

use crate::config::{BattleConfig, Difficulty};

/// One side of the battle: turn owner and, once finished, winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Current step of the battle state machine.
///
/// ```text
/// Choosing ──► PlayerAttacking ──► EnemyAttacking ──► Choosing
///                     │                   │
///                     └──────► Finished ◄─┘
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Player selects a move. Initial state after reset.
    #[default]
    Choosing,
    /// Resolving the player's move.
    PlayerAttacking,
    /// Resolving the enemy's move.
    EnemyAttacking,
    /// Terminal: one combatant fainted.
    Finished,
}

/// Canonical state of one battle session.
///
/// Combatants are public so hosts can inspect names and moves; their health
/// stays clamped through [`Combatant::set_health`]. Turn bookkeeping is only
/// writable from the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BattleState {
    pub player: Combatant,
    pub enemy: Combatant,

    /// RNG seed for deterministic random generation.
    ///
    /// Set once at session creation and never modified. Combined with
    /// `nonce` to derive a unique seed for every roll.
    game_seed: u64,

    /// Number of resolved moves since session creation.
    pub(crate) nonce: u64,

    pub(crate) phase: Phase,
    pub(crate) turn: Side,
    pub(crate) winner: Option<Side>,
    pub(crate) narration: String,
    pub(crate) topic: String,

    /// Completed player moves in the current battle.
    pub(crate) round: u32,

    /// Incremented on every reset so hosts can discard stale events.
    pub(crate) epoch: u64,

    difficulty: Difficulty,
}

impl BattleState {
    /// Creates a session with both combatants at full health, ready for the
    /// player's first choice.
    pub fn new(
        mut player: Combatant,
        mut enemy: Combatant,
        config: &BattleConfig,
        game_seed: u64,
        topic: impl Into<String>,
    ) -> Self {
        player.restore();
        enemy.restore();
        let topic = topic.into();

        Self {
            player,
            enemy,
            game_seed,
            nonce: 0,
            phase: Phase::Choosing,
            turn: Side::Player,
            winner: None,
            narration: crate::engine::narration::topic_announcement(&topic),
            topic,
            round: 0,
            epoch: 0,
            difficulty: config.difficulty,
        }
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Read-only view exposed to presentation layers after every transition.
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            player_health: self.player.health(),
            enemy_health: self.enemy.health(),
            narration: self.narration.clone(),
            winner: self.winner,
            round: self.round,
            epoch: self.epoch,
        }
    }
}

/// Read-only snapshot of the values a presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub turn: Side,
    pub player_health: u32,
    pub enemy_health: u32,
    pub narration: String,
    pub winner: Option<Side>,
    pub round: u32,
    pub epoch: u64,
}
