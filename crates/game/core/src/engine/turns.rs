use crate::combat::{AttackResult, UNSCALED_PERCENT, resolve_attack};
use crate::config::BattleConfig;
use crate::env::{BattleEnv, RollKind, compute_seed};
use crate::state::{Move, Phase, Side};

use super::narration;
use super::{BattleEngine, BattleEvent};

/// Turn sequencing helpers for BattleEngine.
impl BattleEngine<'_> {
    /// Moves to `next` and records the transition.
    pub(super) fn enter_phase(&mut self, next: Phase, events: &mut Vec<BattleEvent>) {
        let from = self.state.phase;
        self.state.phase = next;
        events.push(BattleEvent::PhaseChanged { from, to: next });
    }

    /// Stores `text` as the latest narration and records it.
    pub(super) fn narrate(&mut self, text: String, events: &mut Vec<BattleEvent>) {
        self.state.narration.clone_from(&text);
        events.push(BattleEvent::Narration(text));
    }

    /// Resolves one attack from `side` using `chosen`.
    pub(super) fn execute_attack(
        &mut self,
        env: BattleEnv<'_>,
        side: Side,
        chosen: Move,
        events: &mut Vec<BattleEvent>,
    ) -> AttackResult {
        let seed = compute_seed(
            self.state.game_seed(),
            self.state.nonce,
            side,
            RollKind::DamageBonus,
        );
        let roll = env.rng().range(seed, 0, BattleConfig::DAMAGE_ROLL_MAX);
        let multiplier_percent = match side {
            Side::Player => UNSCALED_PERCENT,
            Side::Enemy => self.state.difficulty().multiplier_percent(),
        };

        let attacker_name = self.state.combatant(side).name().to_owned();

        events.push(BattleEvent::MoveAnnounced {
            side,
            attacker: attacker_name.clone(),
            move_name: chosen.name.clone(),
            element: chosen.element,
        });
        self.narrate(narration::move_used(&attacker_name, &chosen.name), events);

        let target = side.opponent();
        let result = resolve_attack(
            chosen.power,
            roll,
            multiplier_percent,
            self.state.combatant(target).health(),
        );

        self.narrate(
            narration::move_hit(&attacker_name, &chosen.name, result.damage),
            events,
        );
        self.state
            .combatant_mut(target)
            .set_health(result.health_after);
        events.push(BattleEvent::DamageDealt {
            target,
            damage: result.damage,
            health_before: result.health_before,
            health_after: result.health_after,
        });

        self.state.nonce += 1;
        result
    }

    /// Ends the battle in favor of `winner`.
    pub(super) fn finish(&mut self, winner: Side, events: &mut Vec<BattleEvent>) {
        let loser = winner.opponent();
        events.push(BattleEvent::Fainted { side: loser });

        let text = match winner {
            Side::Player => narration::victory(self.state.enemy.name()),
            Side::Enemy => narration::defeat(self.state.player.name()),
        };
        self.narrate(text, events);

        self.state.winner = Some(winner);
        self.enter_phase(Phase::Finished, events);
        events.push(BattleEvent::BattleEnded { winner });
    }
}
