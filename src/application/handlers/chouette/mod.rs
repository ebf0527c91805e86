//! Chouette command handlers.
//!
//! Every handler works on the caller's `ChouetteSession` and persists it
//! through the `SessionStore` after a successful change.

mod create_session;
mod end_chouette;
mod restore_session;
mod seating;
mod start_game;
mod submit_scores;

#[cfg(test)]
mod test_support;

pub use create_session::CreateSessionHandler;
pub use end_chouette::{EndChouetteHandler, EndChouetteResult};
pub use restore_session::{RestoreSessionHandler, RestoreSessionResult};
pub use seating::{
    AssignSeatCommand, AssignSeatHandler, SetQueueCommand, SetQueueHandler,
    ToggleSittingOutCommand, ToggleSittingOutHandler,
};
pub use start_game::{StartGameCommand, StartGameHandler};
pub use submit_scores::{SubmitScoresCommand, SubmitScoresHandler};
