//! Roster Adapters
//!
//! Implementations of the RosterStore port.
//!
//! - **FileRosterStore** - JSON file on disk
//! - **InMemoryRosterStore** - In memory (testing/development)

mod file_roster_store;
mod in_memory_roster_store;
mod roster_document;

pub use file_roster_store::FileRosterStore;
pub use in_memory_roster_store::InMemoryRosterStore;
