//! Player entity and name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{PlayerId, Timestamp, ValidationError};

/// Maximum length for a player's display name.
pub const MAX_NAME_LENGTH: usize = 40;

/// Display name of a player.
///
/// Stored trimmed. Uniqueness is case-insensitive and enforced by the roster,
/// which compares names through [`PlayerName::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a name, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Case-insensitive comparison used for uniqueness checks.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// A known player and their lifetime totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: PlayerName,
    pub total_score: i64,
    pub games_played: u32,
    pub created_at: Timestamp,
}

impl Player {
    /// Creates a player with zeroed lifetime totals.
    pub fn new(id: PlayerId, name: PlayerName) -> Self {
        Self {
            id,
            name,
            total_score: 0,
            games_played: 0,
            created_at: Timestamp::now(),
        }
    }

    /// Applies the result of one finished chouette.
    ///
    /// A zero delta leaves the player untouched and returns false.
    pub fn record_chouette(&mut self, delta: i64) -> bool {
        if delta == 0 {
            return false;
        }
        self.total_score = self.total_score.saturating_add(delta);
        self.games_played = self.games_played.saturating_add(1);
        true
    }
}
