//! Battle state machine and move resolution.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`BattleState`]. It
//! borrows the state mutably for the duration of a call, validates the
//! requested operation against the current phase, and returns the ordered
//! [`BattleEvent`]s the transition produced.
//!
//! Invalid requests (out-of-phase or out-of-range) return a [`BattleError`]
//! and leave the state untouched. The engine never panics on caller input.

mod errors;
mod events;
pub mod narration;
mod turns;

pub use errors::{BattleAction, BattleError};
pub use events::BattleEvent;

use crate::env::{BattleEnv, RollKind, compute_seed};
use crate::state::{BattleSnapshot, BattleState, Phase, Side};

/// Battle engine that resolves moves and drives phase transitions.
///
/// ```text
/// resolve_player_move:  Choosing → PlayerAttacking → EnemyAttacking | Finished
/// resolve_enemy_move:   EnemyAttacking → Choosing | Finished
/// reset:                any → Choosing
/// ```
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// Read-only view of the current battle.
    pub fn snapshot(&self) -> BattleSnapshot {
        self.state.snapshot()
    }

    /// Resolves the player's move at `move_index`.
    ///
    /// Damage is `power + roll(0..=9)`, never scaled by difficulty. If the
    /// enemy faints the battle finishes with the player as winner, otherwise
    /// the enemy's turn begins.
    pub fn resolve_player_move(
        &mut self,
        env: BattleEnv<'_>,
        move_index: usize,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.require_phase(Phase::Choosing, BattleAction::PlayerMove)?;

        let chosen = self.state.player.move_at(move_index).cloned().ok_or(
            BattleError::OutOfRange {
                index: move_index,
                len: self.state.player.moves().len(),
            },
        )?;

        let mut events = Vec::new();
        self.enter_phase(Phase::PlayerAttacking, &mut events);

        let result = self.execute_attack(env, Side::Player, chosen, &mut events);
        self.state.round += 1;

        if result.is_knockout() {
            self.finish(Side::Player, &mut events);
        } else {
            self.state.turn = Side::Enemy;
            self.enter_phase(Phase::EnemyAttacking, &mut events);
        }

        Ok(events)
    }

    /// Resolves the enemy's move.
    ///
    /// The move is chosen uniformly at random; damage is
    /// `floor((power + roll(0..=9)) × difficulty multiplier)`. If the player
    /// faints the battle finishes with the enemy as winner, otherwise control
    /// returns to the player.
    pub fn resolve_enemy_move(
        &mut self,
        env: BattleEnv<'_>,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.require_phase(Phase::EnemyAttacking, BattleAction::EnemyMove)?;

        let seed = compute_seed(
            self.state.game_seed(),
            self.state.nonce,
            Side::Enemy,
            RollKind::MoveChoice,
        );
        let len = self.state.enemy.moves().len();
        let move_index = env.rng().pick_index(seed, len);
        let chosen = self
            .state
            .enemy
            .move_at(move_index)
            .cloned()
            .ok_or(BattleError::OutOfRange {
                index: move_index,
                len,
            })?;

        let mut events = Vec::new();
        let result = self.execute_attack(env, Side::Enemy, chosen, &mut events);

        if result.is_knockout() {
            self.finish(Side::Enemy, &mut events);
        } else {
            let prompt = narration::turn_prompt(&self.state.topic);
            self.narrate(prompt, &mut events);
            self.state.turn = Side::Player;
            self.enter_phase(Phase::Choosing, &mut events);
        }

        Ok(events)
    }

    /// Reinitializes the session for a new topic.
    ///
    /// Valid from any phase. An in-progress battle is abandoned without a
    /// winner; `epoch` is bumped so hosts can drop events from the old battle.
    pub fn reset(&mut self, topic: impl Into<String>) -> Vec<BattleEvent> {
        let topic = topic.into();
        let mut events = Vec::new();

        self.state.player.restore();
        self.state.enemy.restore();
        self.state.winner = None;
        self.state.turn = Side::Player;
        self.state.round = 0;
        self.state.epoch += 1;
        self.state.topic = topic.clone();

        events.push(BattleEvent::BattleReset {
            topic,
            epoch: self.state.epoch,
        });
        if self.state.phase != Phase::Choosing {
            self.enter_phase(Phase::Choosing, &mut events);
        }
        let announcement = narration::topic_announcement(&self.state.topic);
        self.narrate(announcement, &mut events);

        events
    }

    /// Inclusive damage range of a player move, for move-menu hints.
    pub fn player_damage_bounds(&self, move_index: usize) -> Option<(u32, u32)> {
        let mv = self.state.player.move_at(move_index)?;
        Some(crate::combat::damage_bounds(
            mv.power,
            crate::combat::UNSCALED_PERCENT,
        ))
    }

    /// Inclusive damage range of an enemy move at the session difficulty.
    pub fn enemy_damage_bounds(&self, move_index: usize) -> Option<(u32, u32)> {
        let mv = self.state.enemy.move_at(move_index)?;
        Some(crate::combat::damage_bounds(
            mv.power,
            self.state.difficulty().multiplier_percent(),
        ))
    }

    fn require_phase(&self, expected: Phase, action: BattleAction) -> Result<(), BattleError> {
        if self.state.phase != expected {
            return Err(BattleError::InvalidState {
                action,
                phase: self.state.phase,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BattleConfig, Difficulty};
    use crate::env::FixedRng;
    use crate::state::{Combatant, ElementType, Move};

    fn state(difficulty: Difficulty) -> BattleState {
        let player = Combatant::new(
            "Psyduck",
            5,
            [
                Move::new("Scratch", ElementType::Normal, 10),
                Move::new("Water Gun", ElementType::Water, 15),
            ],
        )
        .unwrap();
        let enemy = Combatant::new(
            "Oshawott",
            7,
            [
                Move::new("Tackle", ElementType::Normal, 10),
                Move::new("Razor Shell", ElementType::Water, 20),
            ],
        )
        .unwrap();

        BattleState::new(player, enemy, &BattleConfig::new(difficulty), 7, "Cats vs Dogs")
    }

    #[test]
    fn player_move_emits_narration_before_damage() {
        let mut state = state(Difficulty::Medium);
        let rng = FixedRng(5);
        let events = BattleEngine::new(&mut state)
            .resolve_player_move(BattleEnv::new(&rng), 0)
            .unwrap();

        assert_eq!(
            events,
            vec![
                BattleEvent::PhaseChanged {
                    from: Phase::Choosing,
                    to: Phase::PlayerAttacking,
                },
                BattleEvent::MoveAnnounced {
                    side: Side::Player,
                    attacker: "Psyduck".into(),
                    move_name: "Scratch".into(),
                    element: ElementType::Normal,
                },
                BattleEvent::Narration("Psyduck used Scratch!".into()),
                BattleEvent::Narration("Psyduck used Scratch! It did 15 damage!".into()),
                BattleEvent::DamageDealt {
                    target: Side::Enemy,
                    damage: 15,
                    health_before: 100,
                    health_after: 85,
                },
                BattleEvent::PhaseChanged {
                    from: Phase::PlayerAttacking,
                    to: Phase::EnemyAttacking,
                },
            ]
        );
        assert_eq!(state.turn(), Side::Enemy);
        assert_eq!(state.round(), 1);
        assert_eq!(state.nonce(), 1);
    }

    #[test]
    fn enemy_move_returns_control_to_player() {
        let mut state = state(Difficulty::Hard);
        let rng = FixedRng(5);
        let mut engine = BattleEngine::new(&mut state);
        engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();

        let events = engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

        // FixedRng(5): move index 5 % 2 = 1 (Razor Shell), roll 5 → (20 + 5) × 1.5 = 37
        assert!(events.contains(&BattleEvent::DamageDealt {
            target: Side::Player,
            damage: 37,
            health_before: 100,
            health_after: 63,
        }));
        assert_eq!(
            events.last(),
            Some(&BattleEvent::PhaseChanged {
                from: Phase::EnemyAttacking,
                to: Phase::Choosing,
            })
        );
        assert_eq!(state.narration(), "Topic: Cats vs Dogs. What will you do?");
        assert_eq!(state.turn(), Side::Player);
    }

    #[test]
    fn enemy_move_out_of_phase_is_rejected() {
        let mut state = state(Difficulty::Medium);
        let before = state.clone();
        let rng = FixedRng(0);

        let err = BattleEngine::new(&mut state)
            .resolve_enemy_move(BattleEnv::new(&rng))
            .unwrap_err();

        assert_eq!(
            err,
            BattleError::InvalidState {
                action: BattleAction::EnemyMove,
                phase: Phase::Choosing,
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_move_is_rejected_without_changes() {
        let mut state = state(Difficulty::Medium);
        let before = state.clone();
        let rng = FixedRng(0);

        let err = BattleEngine::new(&mut state)
            .resolve_player_move(BattleEnv::new(&rng), 2)
            .unwrap_err();

        assert_eq!(err, BattleError::OutOfRange { index: 2, len: 2 });
        assert_eq!(state, before);
    }

    #[test]
    fn reset_from_choosing_skips_phase_change() {
        let mut state = state(Difficulty::Medium);
        let events = BattleEngine::new(&mut state).reset("Pizza vs Burgers");

        assert_eq!(
            events,
            vec![
                BattleEvent::BattleReset {
                    topic: "Pizza vs Burgers".into(),
                    epoch: 1,
                },
                BattleEvent::Narration("Battle topic: Pizza vs Burgers. What will you do?".into()),
            ]
        );
    }

    #[test]
    fn damage_bounds_follow_difficulty() {
        let mut state = state(Difficulty::Easy);
        let engine = BattleEngine::new(&mut state);

        assert_eq!(engine.player_damage_bounds(1), Some((15, 24)));
        // 20 × 0.7 = 14, 29 × 0.7 = 20.3 → 20
        assert_eq!(engine.enemy_damage_bounds(1), Some((14, 20)));
        assert_eq!(engine.player_damage_bounds(9), None);
    }
}
