//! Event bus for battle session events.
//!
//! Every event produced by the engine is wrapped in a [`SessionEvent`] that
//! records which battle (epoch) it belongs to, then broadcast to all
//! subscribers.

mod bus;

pub use bus::{EventBus, SessionEvent};
