//! Battle worker that owns the authoritative [`battle_core::BattleState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], resolves them through
//! [`battle_core::BattleEngine`], and publishes the resulting events to the
//! [`EventBus`]. Enemy turns are not commanded: once the player's attack
//! hands the turn over, the worker schedules the enemy move after the
//! configured pacing delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use battle_core::{
    BattleEngine, BattleEnv, BattleEvent, BattleSnapshot, BattleState, GameError, Phase,
    RngOracle,
};

use crate::api::Result;
use crate::events::EventBus;

/// Commands that can be sent to the battle worker
pub enum Command {
    /// Use the player's move at `index`.
    SelectMove {
        index: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Start a new battle about `topic`. Replies with the new epoch.
    Reset {
        topic: String,
        reply: oneshot::Sender<u64>,
    },
    /// Query the current battle snapshot (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<BattleSnapshot>,
    },
}

/// Background task that processes battle commands.
pub struct BattleWorker {
    state: BattleState,
    rng: Arc<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    pacing: Duration,
    /// When the pending enemy turn fires. `None` means nothing is pending.
    enemy_turn_at: Option<Instant>,
}

impl BattleWorker {
    /// Creates a new battle worker.
    pub fn new(
        state: BattleState,
        rng: Arc<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        pacing: Duration,
    ) -> Self {
        info!(
            "BattleWorker initialized: {} (Lv.{}) vs {} (Lv.{}), difficulty={}, topic={:?}",
            state.player.name(),
            state.player.level(),
            state.enemy.name(),
            state.enemy.level(),
            state.difficulty(),
            state.topic(),
        );

        Self {
            state,
            rng,
            command_rx,
            event_bus,
            pacing,
            enemy_turn_at: None,
        }
    }

    /// Main worker loop.
    ///
    /// Exits once every [`crate::RuntimeHandle`] has been dropped.
    pub async fn run(mut self) {
        loop {
            let deadline = self.enemy_turn_at;
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = sleep_until(deadline), if deadline.is_some() => {
                    self.enemy_turn_at = None;
                    self.handle_enemy_turn();
                }
            }
        }

        debug!("BattleWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectMove { index, reply } => {
                let result = self.handle_player_move(index);
                if reply.send(result).is_err() {
                    debug!("SelectMove reply channel closed (caller dropped)");
                }
            }
            Command::Reset { topic, reply } => {
                let epoch = self.handle_reset(topic);
                if reply.send(epoch).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.state.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_player_move(&mut self, index: usize) -> Result<()> {
        let env = BattleEnv::new(self.rng.as_ref());
        let events = match BattleEngine::new(&mut self.state).resolve_player_move(env, index) {
            Ok(events) => events,
            Err(e) => {
                debug!(
                    "Ignored player move {} ({} {}): {}",
                    index,
                    e.severity().as_str(),
                    e.error_code(),
                    e
                );
                return Err(e.into());
            }
        };

        self.publish(events);

        if self.state.phase() == Phase::EnemyAttacking {
            self.enemy_turn_at = Some(Instant::now() + self.pacing);
        }

        Ok(())
    }

    fn handle_enemy_turn(&mut self) {
        let env = BattleEnv::new(self.rng.as_ref());
        match BattleEngine::new(&mut self.state).resolve_enemy_move(env) {
            Ok(events) => self.publish(events),
            // Only reachable if the phase moved without clearing the schedule.
            Err(e) => warn!("Scheduled enemy turn rejected: {}", e),
        }
    }

    fn handle_reset(&mut self, topic: String) -> u64 {
        if self.enemy_turn_at.take().is_some() {
            debug!("Cancelled pending enemy turn");
        }

        let events = BattleEngine::new(&mut self.state).reset(topic);
        info!(
            "Battle reset: epoch={}, topic={:?}",
            self.state.epoch(),
            self.state.topic()
        );
        self.publish(events);

        self.state.epoch()
    }

    fn publish(&self, events: Vec<BattleEvent>) {
        if let Some(BattleEvent::BattleEnded { winner }) = events.last() {
            info!(
                "Battle finished: winner={}, rounds={}",
                winner,
                self.state.round()
            );
        }

        self.event_bus.publish_all(self.state.epoch(), events);
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
