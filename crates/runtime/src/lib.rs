//! Runtime orchestration for a single battle session.
//!
//! This crate wires the synchronous battle engine into an async session: a
//! worker task owns the [`battle_core::BattleState`], drives enemy turns on its
//! own, and publishes every engine event to subscribers. Consumers embed
//! [`Runtime`] and interact with the session through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the epoch-tagged event bus
//! - [`providers`] holds fallback collaborators and helpers for external content
//! - `workers` keeps the battle task internal to the crate
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

mod workers;

pub use api::{
    ArtProvider, ArtRequest, ArtResponse, DescriptionProvider, DescriptionRequest,
    DescriptionResponse, ProviderError, Result, RuntimeError, RuntimeHandle, TopicProvider,
    TopicRequest, TopicResponse,
};
pub use events::{EventBus, SessionEvent};
pub use providers::{
    BattleAssets, FALLBACK_BACKGROUND, FallbackArtProvider, FallbackDescriptionProvider,
    FallbackTopicProvider, PLACEHOLDER_SPRITE, fallback_description, resolve_assets, with_fallback,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
