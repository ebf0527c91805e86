//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, PlayerId};
use crate::ports::{RosterError, StorageError};

/// Session-specific errors.
///
/// Validation variants are returned before the session is touched, so a
/// rejected operation leaves the session exactly as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Operation not permitted in the current mode.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Missing or conflicting seats when starting a game.
    #[error("Invalid seating: {0}")]
    InvalidSeating(String),

    /// Player already occupies another seat or queue slot.
    #[error("Player {0} already occupies a seat")]
    DuplicateSeat(PlayerId),

    /// Entered scores do not sum to zero.
    #[error("Scores must sum to zero, got {sum}")]
    UnbalancedScore { sum: i64 },

    /// A score entry is not acceptable for this round.
    #[error("Invalid score entry: {0}")]
    InvalidScore(String),

    /// Player is not seated in this session.
    #[error("Player {0} is not seated in this session")]
    NotSeated(PlayerId),

    /// Lifetime totals could not be updated.
    #[error("Roster update failed: {0}")]
    Roster(#[from] RosterError),

    /// Session snapshot could not be persisted.
    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SessionError::InvalidState(message.into())
    }

    pub fn invalid_seating(message: impl Into<String>) -> Self {
        SessionError::InvalidSeating(message.into())
    }

    pub fn invalid_score(message: impl Into<String>) -> Self {
        SessionError::InvalidScore(message.into())
    }

    /// Returns true for errors raised by validation, which never mutate state.
    pub fn is_validation(&self) -> bool {
        !matches!(self, SessionError::Roster(_) | SessionError::Storage(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::InvalidSeating(_) => ErrorCode::InvalidSeating,
            SessionError::DuplicateSeat(_) => ErrorCode::DuplicateSeat,
            SessionError::UnbalancedScore { .. } => ErrorCode::UnbalancedScore,
            SessionError::InvalidScore(_) => ErrorCode::ValidationFailed,
            SessionError::NotSeated(_) => ErrorCode::NotSeated,
            SessionError::Roster(RosterError::NotFound(_)) => ErrorCode::PlayerNotFound,
            SessionError::Roster(RosterError::DuplicateName(_)) => ErrorCode::DuplicatePlayerName,
            SessionError::Roster(RosterError::Validation(_)) => ErrorCode::ValidationFailed,
            SessionError::Roster(RosterError::Storage(_)) => ErrorCode::StorageFailure,
            SessionError::Storage(_) => ErrorCode::StorageFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    #[test]
    fn codes_follow_taxonomy() {
        assert_eq!(
            SessionError::invalid_state("x").code(),
            ErrorCode::InvalidStateTransition
        );
        assert_eq!(
            SessionError::invalid_seating("x").code(),
            ErrorCode::InvalidSeating
        );
        assert_eq!(
            SessionError::DuplicateSeat(pid("a")).code(),
            ErrorCode::DuplicateSeat
        );
        assert_eq!(
            SessionError::UnbalancedScore { sum: 3 }.code(),
            ErrorCode::UnbalancedScore
        );
        assert_eq!(SessionError::NotSeated(pid("a")).code(), ErrorCode::NotSeated);
        assert_eq!(
            SessionError::from(StorageError::IoError("disk full".into())).code(),
            ErrorCode::StorageFailure
        );
    }

    #[test]
    fn storage_errors_are_not_validation() {
        assert!(SessionError::invalid_score("x").is_validation());
        assert!(!SessionError::from(StorageError::IoError("x".into())).is_validation());
        assert!(!SessionError::from(RosterError::Storage("x".into())).is_validation());
    }

    #[test]
    fn messages_name_the_player() {
        let err = SessionError::NotSeated(pid("player_7"));
        assert_eq!(err.to_string(), "Player player_7 is not seated in this session");
        let err = SessionError::UnbalancedScore { sum: -2 };
        assert_eq!(err.to_string(), "Scores must sum to zero, got -2");
    }
}
