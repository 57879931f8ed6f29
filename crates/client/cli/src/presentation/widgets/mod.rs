//! Widgets composed by [`super::ui`].

pub mod combatant;
pub mod footer;
pub mod header;
pub mod log;
pub mod moves;
pub mod title;
pub mod topic_modal;
