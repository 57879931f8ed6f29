//! Static battle content and data loaders.
//!
//! This crate houses the content a battle is built from:
//! - The built-in roster (player and enemy monsters)
//! - Topic pools for the topic picker and offline topic generation
//! - RON roster and TOML configuration loaders (`loaders` feature)
//!
//! Content is resolved once at session start and never appears in battle
//! state beyond the combatants it produces.

pub mod roster;
pub mod topics;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::Roster;
pub use topics::{RANDOM_TOPICS, TopicPool, WEB_TOPICS};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RosterLoader};
