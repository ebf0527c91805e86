//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, modes, errors)
//! - `player` - Player entity referenced by sessions
//! - `session` - Chouette session state machine, scoring and rotation

pub mod foundation;
pub mod player;
pub mod session;
