//! Chouette session aggregate.
//!
//! One Box player faces a rotating Team: a Captain plus a queue of waiting
//! players. The session owns the current seating, the running scores for
//! this chouette and who is sitting out.
//!
//! # Ownership
//!
//! Sessions reference players by ID but do NOT own them.
//! Players and lifetime totals are managed by the roster.

use std::collections::BTreeMap;

use super::rotation::{rotate, Rotation};
use super::scoring::{resolve, RoundScores, ScoringPolicy};
use super::table::{first_conflict, GameTable, Seat, SetupTable, Table};
use super::SessionError;
use crate::domain::foundation::{GameMode, PlayerId, SessionId, StateMachine, Timestamp};

/// Chouette session aggregate.
///
/// # Invariants
///
/// - In Game mode Box and Captain are set and distinct from each other and
///   from every queue entry
/// - Queue entries are unique; position 1 is next in line for Captain
/// - In Game mode every seated player, and nobody else, has a score and a
///   sitting-out flag
/// - Rejected operations leave the session untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChouetteSession {
    id: SessionId,
    created_at: Timestamp,
    is_complete: bool,
    table: Table,
}

/// Result of applying one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Scores applied this round, including a derived Box score.
    pub scores: BTreeMap<PlayerId, i64>,
    pub box_score: i64,
    pub captain_score: i64,
    pub rotation: Rotation,
}

/// Result of ending a chouette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndedChouette {
    /// Accumulated score of every seated player, zero for never-scored ones.
    pub final_scores: BTreeMap<PlayerId, i64>,
    /// The finished session, marked complete.
    pub completed: ChouetteSession,
    /// Fresh setup session replacing it.
    pub new_session: ChouetteSession,
}

impl ChouetteSession {
    /// Create a new session in setup mode with no seats filled.
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            created_at: Timestamp::now(),
            is_complete: false,
            table: Table::default(),
        }
    }

    /// Reconstitute a session from persistence.
    pub fn reconstitute(
        id: SessionId,
        created_at: Timestamp,
        is_complete: bool,
        table: Table,
    ) -> Self {
        Self {
            id,
            created_at,
            is_complete,
            table,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn mode(&self) -> GameMode {
        self.table.mode()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The in-game table, if a game is running.
    pub fn game(&self) -> Option<&GameTable> {
        match &self.table {
            Table::Game(game) => Some(game),
            Table::Setup(_) => None,
        }
    }

    pub fn box_player(&self) -> Option<&PlayerId> {
        self.table.box_player()
    }

    pub fn captain(&self) -> Option<&PlayerId> {
        self.table.captain()
    }

    pub fn queue(&self) -> &[PlayerId] {
        self.table.queue()
    }

    /// Running scores for this chouette; empty during setup.
    pub fn current_scores(&self) -> BTreeMap<PlayerId, i64> {
        self.game().map(|g| g.scores().clone()).unwrap_or_default()
    }

    pub fn score_of(&self, player: &PlayerId) -> Option<i64> {
        self.game().and_then(|g| g.scores().get(player).copied())
    }

    pub fn is_sitting_out(&self, player: &PlayerId) -> bool {
        self.game().is_some_and(|g| g.is_sitting_out(player))
    }

    /// Seated players ordered by running score, best first.
    ///
    /// Ties keep seating order (Box, Captain, queue).
    pub fn standings(&self) -> Vec<(PlayerId, i64)> {
        let Some(game) = self.game() else {
            return Vec::new();
        };
        let mut standings: Vec<(PlayerId, i64)> = game
            .seating()
            .players()
            .map(|id| (id.clone(), game.scores().get(id).copied().unwrap_or(0)))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────

    /// Set or clear the Box or Captain seat.
    ///
    /// # Errors
    ///
    /// - `InvalidState` once a game has started
    pub fn assign_seat(&mut self, seat: Seat, player: Option<PlayerId>) -> Result<(), SessionError> {
        let Table::Setup(setup) = &mut self.table else {
            return Err(SessionError::invalid_state(format!(
                "cannot assign the {} seat during a game",
                seat
            )));
        };
        match seat {
            Seat::Box => setup.box_player = player,
            Seat::Captain => setup.captain = player,
        }
        Ok(())
    }

    /// Replace the queue order wholesale.
    ///
    /// During a game this is how players are reordered or added; newcomers
    /// start at zero and active.
    ///
    /// # Errors
    ///
    /// - `DuplicateSeat` if the queue repeats a player or contains the Box
    ///   or Captain
    /// - `InvalidSeating` if the queue is over capacity
    /// - `InvalidState` if a game is running and a current member is missing
    pub fn set_queue(&mut self, queue: Vec<PlayerId>) -> Result<(), SessionError> {
        match &mut self.table {
            Table::Setup(setup) => setup.replace_queue(queue),
            Table::Game(game) => game.replace_queue(queue),
        }
    }

    /// Start the game with the given seating.
    ///
    /// Every seated player starts at zero and active, whatever the session
    /// held before.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if a game is already running
    /// - `InvalidSeating` if a seat is missing or a player appears twice
    pub fn start_game(
        &mut self,
        box_player: Option<PlayerId>,
        captain: Option<PlayerId>,
        queue: Vec<PlayerId>,
    ) -> Result<(), SessionError> {
        self.mode()
            .transition_to(GameMode::Game)
            .map_err(|_| SessionError::invalid_state("a game is already in progress"))?;

        let game = GameTable::seat(box_player, captain, queue)?;
        self.table = Table::Game(game);
        Ok(())
    }

    /// Start the game with the seats assigned during setup.
    pub fn start_from_assigned_seats(&mut self) -> Result<(), SessionError> {
        let Table::Setup(setup) = &self.table else {
            return Err(SessionError::invalid_state("a game is already in progress"));
        };
        let SetupTable {
            box_player,
            captain,
            queue,
        } = setup.clone();
        self.start_game(box_player, captain, queue)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Game
    // ─────────────────────────────────────────────────────────────────────────

    /// Flip a seated player's sitting-out flag and return the new value.
    ///
    /// Only the next submission is affected; running scores are untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidState` during setup
    /// - `NotSeated` if the player is not at the table
    pub fn toggle_sitting_out(&mut self, player: &PlayerId) -> Result<bool, SessionError> {
        match &mut self.table {
            Table::Game(game) => game.toggle_sitting_out(player),
            Table::Setup(setup) => {
                let seated = setup.box_player.as_ref() == Some(player)
                    || setup.captain.as_ref() == Some(player)
                    || setup.queue.contains(player);
                if seated {
                    Err(SessionError::invalid_state(
                        "players can only sit out once the game has started",
                    ))
                } else {
                    Err(SessionError::NotSeated(player.clone()))
                }
            }
        }
    }

    /// Apply the scores of a finished game and rotate seats.
    ///
    /// # Errors
    ///
    /// - `InvalidState` during setup
    /// - `NotSeated`, `InvalidScore`, `UnbalancedScore` per [`ScoringPolicy`]
    pub fn submit_scores(
        &mut self,
        submission: &RoundScores,
        policy: ScoringPolicy,
    ) -> Result<RoundOutcome, SessionError> {
        let Table::Game(game) = &mut self.table else {
            return Err(SessionError::invalid_state(
                "scores can only be submitted during a game",
            ));
        };

        let resolved = resolve(game, submission, policy)?;
        let (seating, rotation) = rotate(
            game.seating(),
            resolved.box_score,
            resolved.captain_score,
            |id| game.is_sitting_out(id),
        );

        game.accumulate(&resolved.entries);
        game.reseat(seating);

        Ok(RoundOutcome {
            scores: resolved.entries,
            box_score: resolved.box_score,
            captain_score: resolved.captain_score,
            rotation,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// End the chouette, returning final scores and a fresh setup session.
    ///
    /// Always succeeds, from either mode.
    pub fn end_chouette(mut self) -> EndedChouette {
        let final_scores = self.current_scores();
        self.is_complete = true;
        EndedChouette {
            final_scores,
            completed: self,
            new_session: ChouetteSession::new(),
        }
    }

    /// Returns true if `player` holds any seat or queue slot.
    pub fn is_seated(&self, player: &PlayerId) -> bool {
        self.box_player() == Some(player)
            || self.captain() == Some(player)
            || self.queue().contains(player)
    }

    /// Checks the in-game seating invariants.
    pub fn check_invariants(&self) -> Result<(), SessionError> {
        let Some(game) = self.game() else {
            return Ok(());
        };
        if game.box_player() == game.captain() {
            return Err(SessionError::invalid_seating("Box and Captain coincide"));
        }
        if let Some(dup) = first_conflict(Some(game.box_player()), Some(game.captain()), game.queue()) {
            return Err(SessionError::DuplicateSeat(dup));
        }
        let seated = game.queue().len() + 2;
        if game.scores().len() != seated || game.sitting_out().len() != seated {
            return Err(SessionError::invalid_state(
                "scores and sitting-out flags must cover exactly the seated players",
            ));
        }
        Ok(())
    }
}

impl Default for ChouetteSession {
    fn default() -> Self {
        Self::new()
    }
}
