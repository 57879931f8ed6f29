//! Error types for battle operations.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Phase;

/// Engine operation that was attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleAction {
    PlayerMove,
    EnemyMove,
}

/// Errors surfaced by [`super::BattleEngine`].
///
/// Both variants are validation failures: the engine leaves the state exactly
/// as it was, and hosts are expected to drop the request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("{action} is not allowed during the {phase} phase")]
    InvalidState { action: BattleAction, phase: Phase },

    #[error("move index {index} is out of range ({len} moves available)")]
    OutOfRange { index: usize, len: usize },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "BATTLE_INVALID_STATE",
            Self::OutOfRange { .. } => "BATTLE_OUT_OF_RANGE",
        }
    }
}
