//! Score entry for one finished game.
//!
//! Two entry policies exist. `ZeroSum` takes every active player's score as
//! entered and only insists the round balances. `DerivedBox` takes the Team's
//! scores as doubling-cube values and computes the Box's score as their
//! negated sum.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::table::GameTable;
use super::SessionError;
use crate::domain::foundation::PlayerId;

/// Doubling-cube values, including gammons (2x) and backgammons (3x).
pub const CUBE_VALUES: [i64; 30] = [
    -192, -128, -96, -64, -48, -32, -24, -16, -12, -8, -6, -4, -3, -2, -1, 1, 2, 3, 4, 6, 8, 12,
    16, 24, 32, 48, 64, 96, 128, 192,
];

/// Starting value for a team member's entry.
pub const DEFAULT_CUBE_VALUE: i64 = 1;

/// Returns true if `value` can be reached with the doubling cube.
pub fn is_cube_value(value: i64) -> bool {
    CUBE_VALUES.contains(&value)
}

/// Next cube value above `value`, saturating at the top.
///
/// Values that are not on the cube reset to [`DEFAULT_CUBE_VALUE`].
pub fn next_cube_value_up(value: i64) -> i64 {
    match CUBE_VALUES.iter().position(|v| *v == value) {
        Some(i) => CUBE_VALUES.get(i + 1).copied().unwrap_or(value),
        None => DEFAULT_CUBE_VALUE,
    }
}

/// Next cube value below `value`, saturating at the bottom.
///
/// Values that are not on the cube reset to [`DEFAULT_CUBE_VALUE`].
pub fn next_cube_value_down(value: i64) -> i64 {
    match CUBE_VALUES.iter().position(|v| *v == value) {
        Some(0) => value,
        Some(i) => CUBE_VALUES[i - 1],
        None => DEFAULT_CUBE_VALUE,
    }
}

/// How a round's scores are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Every active player's score is entered; the round must sum to zero.
    ZeroSum,
    /// Team scores are entered as cube values; Box gets their negated sum.
    #[default]
    DerivedBox,
}

/// Scores submitted for one finished game, keyed by player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundScores(BTreeMap<PlayerId, i64>);

impl RoundScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, player: PlayerId, score: i64) -> Self {
        self.0.insert(player, score);
        self
    }

    pub fn insert(&mut self, player: PlayerId, score: i64) -> Option<i64> {
        self.0.insert(player, score)
    }

    pub fn get(&self, player: &PlayerId) -> Option<i64> {
        self.0.get(player).copied()
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.0.contains_key(player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &i64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all entries, or `None` on overflow.
    pub fn total(&self) -> Option<i64> {
        self.0.values().try_fold(0i64, |acc, v| acc.checked_add(*v))
    }
}

impl FromIterator<(PlayerId, i64)> for RoundScores {
    fn from_iter<I: IntoIterator<Item = (PlayerId, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A submission checked against the table and expanded per the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ResolvedRound {
    pub entries: BTreeMap<PlayerId, i64>,
    pub box_score: i64,
    pub captain_score: i64,
}

/// Validates a submission and computes the per-player scores to apply.
///
/// # Errors
///
/// - `NotSeated` if an entry names a player who is not at the table
/// - `InvalidScore` if an entry names a sitting-out player, the entry
///   breaks the `DerivedBox` rules, or a running score would overflow
/// - `UnbalancedScore` if a `ZeroSum` round does not sum to zero
pub(super) fn resolve(
    table: &GameTable,
    submission: &RoundScores,
    policy: ScoringPolicy,
) -> Result<ResolvedRound, SessionError> {
    for (id, _) in submission.iter() {
        if !table.is_seated(id) {
            return Err(SessionError::NotSeated(id.clone()));
        }
        if table.is_sitting_out(id) {
            return Err(SessionError::invalid_score(format!(
                "{} is sitting out this round",
                id
            )));
        }
    }

    let entries = match policy {
        ScoringPolicy::ZeroSum => {
            let sum = submission
                .total()
                .ok_or_else(|| SessionError::invalid_score("round total overflows"))?;
            if sum != 0 {
                return Err(SessionError::UnbalancedScore { sum });
            }
            submission.0.clone()
        }
        ScoringPolicy::DerivedBox => {
            let box_player = table.box_player();
            if submission.contains(box_player) {
                return Err(SessionError::invalid_score(
                    "Box score is derived from the team's scores",
                ));
            }
            if submission.is_empty() {
                return Err(SessionError::invalid_score("no team scores submitted"));
            }
            if let Some((id, value)) = submission.iter().find(|(_, v)| !is_cube_value(**v)) {
                return Err(SessionError::invalid_score(format!(
                    "{} for {} is not a doubling cube value",
                    value, id
                )));
            }
            let team_total = submission
                .total()
                .ok_or_else(|| SessionError::invalid_score("round total overflows"))?;

            let box_score = team_total
                .checked_neg()
                .ok_or_else(|| SessionError::invalid_score("round total overflows"))?;

            let mut entries = submission.0.clone();
            entries.insert(box_player.clone(), box_score);
            entries
        }
    };

    for (id, score) in &entries {
        let current = table.scores().get(id).copied().unwrap_or(0);
        if current.checked_add(*score).is_none() {
            return Err(SessionError::invalid_score(format!(
                "running score of {} would overflow",
                id
            )));
        }
    }

    let box_score = entries.get(table.box_player()).copied().unwrap_or(0);
    let captain_score = entries.get(table.captain()).copied().unwrap_or(0);
    Ok(ResolvedRound {
        entries,
        box_score,
        captain_score,
    })
}
