//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be {max} characters or less")]
    TooLong { field: String, max: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    UnbalancedScore,

    // Seating errors
    InvalidSeating,
    DuplicateSeat,
    NotSeated,

    // State errors
    InvalidStateTransition,

    // Roster errors
    PlayerNotFound,
    DuplicatePlayerName,

    // Infrastructure errors
    StorageFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnbalancedScore => "UNBALANCED_SCORE",
            ErrorCode::InvalidSeating => "INVALID_SEATING",
            ErrorCode::DuplicateSeat => "DUPLICATE_SEAT",
            ErrorCode::NotSeated => "NOT_SEATED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            ErrorCode::StorageFailure => "STORAGE_FAILURE",
        };
        write!(f, "{}", s)
    }
}
