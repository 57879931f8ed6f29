//! Provider implementations and helpers built on the collaborator traits.

mod fallback;
pub mod text;

pub use fallback::{
    BattleAssets, FALLBACK_BACKGROUND, FallbackArtProvider, FallbackDescriptionProvider,
    FallbackTopicProvider, PLACEHOLDER_SPRITE, fallback_description, resolve_assets, with_fallback,
};
