//! Player domain module.
//!
//! Players are owned by the roster; sessions only reference them by
//! [`PlayerId`](crate::domain::foundation::PlayerId).

mod aggregate;

pub use aggregate::{Player, PlayerName, MAX_NAME_LENGTH};
