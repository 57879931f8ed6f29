//! Worker tasks that back the runtime orchestration.
//!
//! The battle worker owns the session state and executes every command
//! against the engine.

mod battle;

pub use battle::{BattleWorker, Command};
