//! Post-game seat rotation.
//!
//! Whoever wins a round stays in (or moves into) the Box. The first active
//! queue member becomes the new Captain and the displaced player joins the
//! back of the active part of the queue, ahead of anyone sitting out.

use serde::{Deserialize, Serialize};
use std::iter;

use crate::domain::foundation::PlayerId;

/// Box, Captain and queue of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    pub box_player: PlayerId,
    pub captain: PlayerId,
    pub queue: Vec<PlayerId>,
}

impl Seating {
    /// All seated players: Box, Captain, then the queue in order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        iter::once(&self.box_player)
            .chain(iter::once(&self.captain))
            .chain(self.queue.iter())
    }
}

/// What happened to the seating after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Box won and kept the seat; the Captain went to the queue.
    BoxWon,
    /// Captain won and took the Box; the old Box went to the queue.
    TeamWon,
    /// A side won but nobody in the queue could step up.
    NoChallenger,
    /// Neither Box nor Captain scored positively.
    NoWinner,
}

impl Rotation {
    /// Returns true if any seat changed hands.
    pub fn changed_seats(&self) -> bool {
        matches!(self, Rotation::BoxWon | Rotation::TeamWon)
    }
}

/// Computes the seating after a round.
///
/// The Box's score is checked first: if it is positive Box won, otherwise a
/// positive Captain score means the Team won. `is_sitting_out` tells which
/// queue members are skipped when picking the next Captain; they keep their
/// relative order at the tail of the queue.
pub fn rotate<F>(
    seating: &Seating,
    box_score: i64,
    captain_score: i64,
    is_sitting_out: F,
) -> (Seating, Rotation)
where
    F: Fn(&PlayerId) -> bool,
{
    let box_won = if box_score > 0 {
        true
    } else if captain_score > 0 {
        false
    } else {
        return (seating.clone(), Rotation::NoWinner);
    };

    let (active, inactive): (Vec<PlayerId>, Vec<PlayerId>) = seating
        .queue
        .iter()
        .cloned()
        .partition(|id| !is_sitting_out(id));

    let mut active = active.into_iter();
    let Some(next_captain) = active.next() else {
        return (seating.clone(), Rotation::NoChallenger);
    };

    let (box_player, displaced, rotation) = if box_won {
        (
            seating.box_player.clone(),
            seating.captain.clone(),
            Rotation::BoxWon,
        )
    } else {
        (
            seating.captain.clone(),
            seating.box_player.clone(),
            Rotation::TeamWon,
        )
    };

    let queue = active
        .chain(iter::once(displaced))
        .chain(inactive)
        .collect();

    (
        Seating {
            box_player,
            captain: next_captain,
            queue,
        },
        rotation,
    )
}
