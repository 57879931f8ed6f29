//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! choosing moves, resetting the session, or streaming battle events.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::BattleSnapshot;

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, SessionEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the battle session
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Use the player's move at `index`.
    ///
    /// Returns [`RuntimeError::Rejected`] when it is not the player's turn or
    /// the index is out of range; the session is left untouched in that case.
    /// The enemy reply is scheduled by the worker and arrives as events.
    pub async fn select_move(&self, index: usize) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SelectMove {
                index,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Start a fresh battle about `topic`, abandoning the current one.
    ///
    /// Any pending enemy turn is cancelled. Returns the new epoch.
    pub async fn reset(&self, topic: impl Into<String>) -> Result<u64> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Reset {
                topic: topic.into(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current battle snapshot
    pub async fn query_snapshot(&self) -> Result<BattleSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to battle events.
    ///
    /// Events from an abandoned battle carry an older epoch than the latest
    /// [`battle_core::BattleEvent::BattleReset`]; consumers should drop them.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
