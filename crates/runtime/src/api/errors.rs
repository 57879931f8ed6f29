//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and rejected battle commands so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{BattleError, CombatantError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a roster to be configured before building")]
    MissingRoster,

    #[error("invalid roster")]
    InvalidRoster(#[source] CombatantError),

    /// The engine refused the command; the session is unchanged.
    #[error(transparent)]
    Rejected(#[from] BattleError),
}

impl RuntimeError {
    /// Whether the error only means "not now" and the session is still usable.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(e) if e.severity() == ErrorSeverity::Validation)
    }
}
