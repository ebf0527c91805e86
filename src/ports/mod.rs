//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Persists the single active session snapshot
//! - `RosterStore` - Durable player list and lifetime totals

mod roster_store;
mod session_store;

pub use roster_store::{RosterError, RosterStore};
pub use session_store::{SessionStore, StorageError};
