//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and persistence.

pub mod chouette;

pub use chouette::{
    AssignSeatCommand, AssignSeatHandler, CreateSessionHandler, EndChouetteHandler,
    EndChouetteResult, RestoreSessionHandler, RestoreSessionResult, SetQueueCommand,
    SetQueueHandler, StartGameCommand, StartGameHandler, SubmitScoresCommand,
    SubmitScoresHandler, ToggleSittingOutCommand, ToggleSittingOutHandler,
};
