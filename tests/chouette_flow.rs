//! Integration tests for a full chouette evening against the file stores.
//!
//! Each test works in its own temporary directory and reopens the stores
//! to check what actually reached the disk.

use std::sync::Arc;

use chouette_scoreboard::adapters::{FileRosterStore, FileSessionStore};
use chouette_scoreboard::application::{
    EndChouetteHandler, RestoreSessionHandler, SetQueueCommand, SetQueueHandler,
    StartGameCommand, StartGameHandler, SubmitScoresCommand, SubmitScoresHandler,
    ToggleSittingOutCommand, ToggleSittingOutHandler,
};
use chouette_scoreboard::domain::foundation::GameMode;
use chouette_scoreboard::domain::player::{Player, PlayerName};
use chouette_scoreboard::domain::session::{RoundScores, Rotation, ScoringPolicy, SessionError};
use chouette_scoreboard::ports::{RosterStore, SessionStore};
use tempfile::TempDir;

struct Club {
    _dir: TempDir,
    session_path: std::path::PathBuf,
    store: Arc<FileSessionStore>,
    roster: Arc<FileRosterStore>,
}

impl Club {
    fn open() -> Self {
        let dir = TempDir::new().unwrap();
        let session_path = dir.path().join("chouette_session.json");
        let store = Arc::new(FileSessionStore::new(&session_path));
        let roster = Arc::new(FileRosterStore::new(dir.path().join("players.json")));
        Self {
            _dir: dir,
            session_path,
            store,
            roster,
        }
    }

    async fn register(&self, name: &str) -> Player {
        self.roster
            .register(PlayerName::new(name).unwrap())
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn full_evening_persists_rotation_and_lifetime_totals() {
    let club = Club::open();
    let alice = club.register("Alice").await;
    let bob = club.register("Bob").await;
    let carol = club.register("Carol").await;
    let dave = club.register("Dave").await;

    let restored = RestoreSessionHandler::new(club.store.clone())
        .handle()
        .await
        .unwrap();
    assert!(!restored.restored);
    let mut session = restored.session;

    StartGameHandler::new(club.store.clone())
        .handle(
            &mut session,
            StartGameCommand::WithSeats {
                box_player: Some(alice.id.clone()),
                captain: Some(bob.id.clone()),
                queue: vec![carol.id.clone(), dave.id.clone()],
            },
        )
        .await
        .unwrap();

    let submit = SubmitScoresHandler::new(club.store.clone(), ScoringPolicy::DerivedBox);

    // Team wins a doubled game: Bob takes the Box, Carol captains.
    let outcome = submit
        .handle(
            &mut session,
            SubmitScoresCommand {
                scores: RoundScores::new()
                    .with(bob.id.clone(), 2)
                    .with(carol.id.clone(), 2)
                    .with(dave.id.clone(), 2),
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.rotation, Rotation::TeamWon);
    assert_eq!(outcome.box_score, -6);

    // Dave sits out and the Box wins: Alice captains, Carol queues ahead of Dave.
    ToggleSittingOutHandler::new(club.store.clone())
        .handle(
            &mut session,
            ToggleSittingOutCommand {
                player: dave.id.clone(),
            },
        )
        .await
        .unwrap();
    let outcome = submit
        .handle(
            &mut session,
            SubmitScoresCommand {
                scores: RoundScores::new().with(carol.id.clone(), -1),
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.rotation, Rotation::BoxWon);
    assert_eq!(session.box_player(), Some(&bob.id));
    assert_eq!(session.captain(), Some(&alice.id));
    assert_eq!(session.queue(), &[carol.id.clone(), dave.id.clone()]);

    // What is on disk matches what is in memory.
    let reopened = FileSessionStore::new(&club.session_path);
    assert_eq!(reopened.load().await.unwrap().as_ref(), Some(&session));

    let ended = EndChouetteHandler::new(club.store.clone(), club.roster.clone())
        .handle(&mut session)
        .await
        .unwrap();
    assert_eq!(ended.final_scores.values().sum::<i64>(), 0);
    assert_eq!(ended.players_updated, 4);
    assert_eq!(session.mode(), GameMode::Setup);

    let totals: Vec<(String, i64, u32)> = club
        .roster
        .all_players()
        .await
        .unwrap()
        .into_iter()
        .map(|p| (p.name.to_string(), p.total_score, p.games_played))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("Alice".to_string(), -6, 1),
            ("Bob".to_string(), 3, 1),
            ("Carol".to_string(), 1, 1),
            ("Dave".to_string(), 2, 1),
        ]
    );

    let stored = club.store.load().await.unwrap().unwrap();
    assert_eq!(stored.id(), session.id());
    assert_eq!(stored.mode(), GameMode::Setup);
}

#[tokio::test]
async fn restart_restores_running_game() {
    let club = Club::open();
    let alice = club.register("Alice").await;
    let bob = club.register("Bob").await;

    let mut session = RestoreSessionHandler::new(club.store.clone())
        .handle()
        .await
        .unwrap()
        .session;
    StartGameHandler::new(club.store.clone())
        .handle(
            &mut session,
            StartGameCommand::WithSeats {
                box_player: Some(alice.id.clone()),
                captain: Some(bob.id.clone()),
                queue: vec![],
            },
        )
        .await
        .unwrap();

    let restarted = RestoreSessionHandler::new(Arc::new(FileSessionStore::new(&club.session_path)))
        .handle()
        .await
        .unwrap();

    assert!(restarted.restored);
    assert_eq!(restarted.session, session);
}

#[tokio::test]
async fn corrupt_snapshot_is_replaced_on_restore() {
    let club = Club::open();
    tokio::fs::write(&club.session_path, "not json at all")
        .await
        .unwrap();

    let result = RestoreSessionHandler::new(club.store.clone())
        .handle()
        .await
        .unwrap();

    assert!(!result.restored);
    assert_eq!(
        club.store.load().await.unwrap().map(|s| s.id().clone()),
        Some(result.session.id().clone())
    );
}

#[tokio::test]
async fn removing_a_queued_player_mid_game_is_rejected() {
    let club = Club::open();
    let alice = club.register("Alice").await;
    let bob = club.register("Bob").await;
    let carol = club.register("Carol").await;

    let mut session = RestoreSessionHandler::new(club.store.clone())
        .handle()
        .await
        .unwrap()
        .session;
    StartGameHandler::new(club.store.clone())
        .handle(
            &mut session,
            StartGameCommand::WithSeats {
                box_player: Some(alice.id.clone()),
                captain: Some(bob.id.clone()),
                queue: vec![carol.id.clone()],
            },
        )
        .await
        .unwrap();

    let result = SetQueueHandler::new(club.store.clone())
        .handle(&mut session, SetQueueCommand { queue: vec![] })
        .await;

    assert!(matches!(result, Err(SessionError::InvalidState(_))));
    assert_eq!(session.queue(), &[carol.id.clone()]);
}
