//! GameMode enum for the two phases of a chouette session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Phase of a chouette session.
///
/// `Setup` allows seat assignment, `Game` allows score entry and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    Setup,
    Game,
}

impl GameMode {
    /// Returns true if seats may still be assigned.
    pub fn allows_seat_assignment(&self) -> bool {
        matches!(self, GameMode::Setup)
    }

    /// Returns true if scores may be submitted.
    pub fn allows_scoring(&self) -> bool {
        matches!(self, GameMode::Game)
    }
}

impl StateMachine for GameMode {
    /// Valid transitions:
    /// - Setup -> Game (start game)
    /// - Game -> Setup (end chouette)
    ///
    /// Rounds played inside a game do not change the mode.
    fn can_transition_to(&self, target: &Self) -> bool {
        use GameMode::*;
        matches!((self, target), (Setup, Game) | (Game, Setup))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            GameMode::Setup => vec![GameMode::Game],
            GameMode::Game => vec![GameMode::Setup],
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Setup => "Setup",
            GameMode::Game => "Game",
        };
        write!(f, "{}", s)
    }
}
