//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the chouette domain.

mod errors;
mod game_mode;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use game_mode::GameMode;
pub use ids::{PlayerId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
