//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session snapshot stores (file, in-memory)
//! - `roster` - Player roster stores (file, in-memory)

pub mod roster;
pub mod storage;

pub use roster::{FileRosterStore, InMemoryRosterStore};
pub use storage::{FileSessionStore, InMemorySessionStore};
