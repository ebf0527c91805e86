//! Storage Adapters
//!
//! Implementations of the SessionStore port for persisting the active session.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - Stores the session as a JSON file on disk
//! - **InMemorySessionStore** - Stores the session in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSessionStore, InMemorySessionStore};
//!
//! // Production: file-based storage
//! let store = FileSessionStore::new("./data/chouette_session.json");
//!
//! // Testing: in-memory storage
//! let store = InMemorySessionStore::new();
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
