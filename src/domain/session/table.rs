//! Seating at the chouette table.
//!
//! `Table` is a tagged variant: while in setup every seat is optional and no
//! scores exist; once a game starts Box and Captain are guaranteed and every
//! seated player has a score and a sitting-out flag.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::rotation::Seating;
use super::SessionError;
use crate::domain::foundation::{GameMode, PlayerId};

/// Maximum number of players waiting in the team queue.
pub const MAX_QUEUE_POSITIONS: usize = 12;

/// Seats that can be assigned directly during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Box,
    Captain,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Box => write!(f, "Box"),
            Seat::Captain => write!(f, "Captain"),
        }
    }
}

/// Seating while the session is being set up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetupTable {
    pub box_player: Option<PlayerId>,
    pub captain: Option<PlayerId>,
    pub queue: Vec<PlayerId>,
}

impl SetupTable {
    /// Replaces the queue.
    ///
    /// # Errors
    ///
    /// - `InvalidSeating` if the queue is over capacity
    /// - `DuplicateSeat` if the queue repeats a player or contains an
    ///   assigned Box/Captain
    pub(super) fn replace_queue(&mut self, queue: Vec<PlayerId>) -> Result<(), SessionError> {
        check_queue_capacity(&queue)?;
        if let Some(dup) = first_conflict(self.box_player.as_ref(), self.captain.as_ref(), &queue)
        {
            return Err(SessionError::DuplicateSeat(dup));
        }
        self.queue = queue;
        Ok(())
    }
}

/// Seating and running scores while a game is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTable {
    seating: Seating,
    scores: BTreeMap<PlayerId, i64>,
    sitting_out: BTreeMap<PlayerId, bool>,
}

impl GameTable {
    /// Seats the players with zero scores and nobody sitting out.
    ///
    /// # Errors
    ///
    /// - `InvalidSeating` if Box or Captain is missing, they coincide, the
    ///   queue repeats a player or contains Box/Captain, or the queue is over
    ///   capacity
    pub fn seat(
        box_player: Option<PlayerId>,
        captain: Option<PlayerId>,
        queue: Vec<PlayerId>,
    ) -> Result<Self, SessionError> {
        let box_player =
            box_player.ok_or_else(|| SessionError::invalid_seating("Box seat is empty"))?;
        let captain =
            captain.ok_or_else(|| SessionError::invalid_seating("Captain seat is empty"))?;
        if box_player == captain {
            return Err(SessionError::invalid_seating(format!(
                "{} cannot be both Box and Captain",
                box_player
            )));
        }
        check_queue_capacity(&queue)?;
        if let Some(dup) = first_conflict(Some(&box_player), Some(&captain), &queue) {
            return Err(SessionError::invalid_seating(format!(
                "{} appears more than once at the table",
                dup
            )));
        }

        let seating = Seating {
            box_player,
            captain,
            queue,
        };
        let scores = seating.players().map(|id| (id.clone(), 0)).collect();
        let sitting_out = seating.players().map(|id| (id.clone(), false)).collect();
        Ok(Self {
            seating,
            scores,
            sitting_out,
        })
    }

    /// Rebuilds a table from stored values.
    ///
    /// Seating is validated like [`GameTable::seat`]. Seated players missing
    /// from the maps get zero/false; entries for unseated players are dropped.
    pub fn restore(
        box_player: Option<PlayerId>,
        captain: Option<PlayerId>,
        queue: Vec<PlayerId>,
        scores: &BTreeMap<PlayerId, i64>,
        sitting_out: &BTreeMap<PlayerId, bool>,
    ) -> Result<Self, SessionError> {
        let mut table = Self::seat(box_player, captain, queue)?;
        for (id, score) in table.scores.iter_mut() {
            *score = scores.get(id).copied().unwrap_or(0);
        }
        for (id, flag) in table.sitting_out.iter_mut() {
            *flag = sitting_out.get(id).copied().unwrap_or(false);
        }
        Ok(table)
    }

    pub fn box_player(&self) -> &PlayerId {
        &self.seating.box_player
    }

    pub fn captain(&self) -> &PlayerId {
        &self.seating.captain
    }

    pub fn queue(&self) -> &[PlayerId] {
        &self.seating.queue
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// Running scores for every seated player.
    pub fn scores(&self) -> &BTreeMap<PlayerId, i64> {
        &self.scores
    }

    /// Sitting-out flags for every seated player.
    pub fn sitting_out(&self) -> &BTreeMap<PlayerId, bool> {
        &self.sitting_out
    }

    pub fn is_seated(&self, id: &PlayerId) -> bool {
        self.scores.contains_key(id)
    }

    pub fn is_sitting_out(&self, id: &PlayerId) -> bool {
        self.sitting_out.get(id).copied().unwrap_or(false)
    }

    pub(super) fn toggle_sitting_out(&mut self, id: &PlayerId) -> Result<bool, SessionError> {
        let flag = self
            .sitting_out
            .get_mut(id)
            .ok_or_else(|| SessionError::NotSeated(id.clone()))?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Adds round scores to the running totals.
    ///
    /// `round` must come from `scoring::resolve`, which rejects any entry
    /// that would overflow a running score.
    pub(super) fn accumulate(&mut self, round: &BTreeMap<PlayerId, i64>) {
        for (id, score) in round {
            *self.scores.entry(id.clone()).or_insert(0) += *score;
        }
    }

    /// Replaces the seating. `seating` must seat the same players.
    pub(super) fn reseat(&mut self, seating: Seating) {
        debug_assert!(seating.players().all(|id| self.scores.contains_key(id)));
        self.seating = seating;
    }

    /// Replaces the queue, seating newcomers with zero/false.
    ///
    /// # Errors
    ///
    /// - `DuplicateSeat` if the queue repeats a player or contains Box/Captain
    /// - `InvalidSeating` if the queue is over capacity
    /// - `InvalidState` if a current queue member would be dropped
    pub(super) fn replace_queue(&mut self, queue: Vec<PlayerId>) -> Result<(), SessionError> {
        check_queue_capacity(&queue)?;
        if let Some(dup) = first_conflict(Some(self.box_player()), Some(self.captain()), &queue) {
            return Err(SessionError::DuplicateSeat(dup));
        }
        if let Some(dropped) = self.seating.queue.iter().find(|id| !queue.contains(id)) {
            return Err(SessionError::invalid_state(format!(
                "{} cannot leave the queue during a game",
                dropped
            )));
        }

        for id in &queue {
            self.scores.entry(id.clone()).or_insert(0);
            self.sitting_out.entry(id.clone()).or_insert(false);
        }
        self.seating.queue = queue;
        Ok(())
    }
}

/// Current seating, setup or in-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    Setup(SetupTable),
    Game(GameTable),
}

impl Table {
    pub fn mode(&self) -> GameMode {
        match self {
            Table::Setup(_) => GameMode::Setup,
            Table::Game(_) => GameMode::Game,
        }
    }

    pub fn box_player(&self) -> Option<&PlayerId> {
        match self {
            Table::Setup(t) => t.box_player.as_ref(),
            Table::Game(t) => Some(t.box_player()),
        }
    }

    pub fn captain(&self) -> Option<&PlayerId> {
        match self {
            Table::Setup(t) => t.captain.as_ref(),
            Table::Game(t) => Some(t.captain()),
        }
    }

    pub fn queue(&self) -> &[PlayerId] {
        match self {
            Table::Setup(t) => &t.queue,
            Table::Game(t) => t.queue(),
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::Setup(SetupTable::default())
    }
}

fn check_queue_capacity(queue: &[PlayerId]) -> Result<(), SessionError> {
    if queue.len() > MAX_QUEUE_POSITIONS {
        return Err(SessionError::invalid_seating(format!(
            "queue holds at most {} players, got {}",
            MAX_QUEUE_POSITIONS,
            queue.len()
        )));
    }
    Ok(())
}

/// Returns the first queue entry that repeats or collides with a filled
/// Box/Captain seat.
pub(super) fn first_conflict(
    box_player: Option<&PlayerId>,
    captain: Option<&PlayerId>,
    queue: &[PlayerId],
) -> Option<PlayerId> {
    let mut seen: HashSet<&PlayerId> = box_player.into_iter().chain(captain).collect();
    queue.iter().find(|id| !seen.insert(*id)).cloned()
}
