//! Session domain module.
//!
//! Tracks one chouette: who sits in the Box, who captains the Team, who waits
//! in the queue, the running scores and who is sitting out.
//!
//! # Module Structure
//!
//! - `aggregate` - ChouetteSession aggregate and lifecycle
//! - `table` - Setup/Game seating variants
//! - `rotation` - Post-game seat rotation
//! - `scoring` - Score entry policies and doubling-cube values
//! - `record` - Persisted layout

mod aggregate;
mod errors;
mod record;
mod rotation;
mod scoring;
mod table;

pub use aggregate::{ChouetteSession, EndedChouette, RoundOutcome};
pub use errors::SessionError;
pub use record::SessionRecord;
pub use rotation::{rotate, Rotation, Seating};
pub use scoring::{
    is_cube_value, next_cube_value_down, next_cube_value_up, RoundScores, ScoringPolicy,
    CUBE_VALUES, DEFAULT_CUBE_VALUE,
};
pub use table::{GameTable, Seat, SetupTable, Table, MAX_QUEUE_POSITIONS};
