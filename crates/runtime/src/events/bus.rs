//! Broadcast event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use battle_core::BattleEvent;

/// Engine event tagged with the epoch of the battle that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub epoch: u64,
    pub event: BattleEvent,
}

impl SessionEvent {
    pub fn new(epoch: u64, event: BattleEvent) -> Self {
        Self { epoch, event }
    }

    /// True when this event belongs to a battle older than `current_epoch`.
    pub fn is_stale(&self, current_epoch: u64) -> bool {
        self.epoch < current_epoch
    }
}

/// Broadcast bus shared by the worker and every handle.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tx: broadcast::channel(capacity.max(1)).0,
        }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for battle events");
        }
    }

    /// Publish a batch of engine events under one epoch, preserving order.
    pub fn publish_all(&self, epoch: u64, events: impl IntoIterator<Item = BattleEvent>) {
        for event in events {
            self.publish(SessionEvent::new(epoch, event));
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Side;

    #[test]
    fn publish_all_keeps_order_and_epoch() {
        let bus = EventBus::with_capacity(8);
        let mut rx = bus.subscribe();

        bus.publish_all(
            3,
            [
                BattleEvent::Narration("first".into()),
                BattleEvent::BattleEnded {
                    winner: Side::Player,
                },
            ],
        );

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.epoch, 3);
        assert_eq!(first.event, BattleEvent::Narration("first".into()));
        assert!(second.event.is_terminal());
        assert!(second.is_stale(4));
        assert!(!second.is_stale(3));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(SessionEvent::new(0, BattleEvent::Narration("nobody".into())));
    }
}
