//! `chouette` - restores the active session and prints where everyone sits.

use std::process::ExitCode;
use std::sync::Arc;

use chouette_scoreboard::adapters::{FileRosterStore, FileSessionStore};
use chouette_scoreboard::application::RestoreSessionHandler;
use chouette_scoreboard::config::AppConfig;
use chouette_scoreboard::domain::foundation::PlayerId;
use chouette_scoreboard::domain::player::Player;
use chouette_scoreboard::domain::session::ChouetteSession;
use chouette_scoreboard::ports::{RosterStore, SessionStore};
use chouette_scoreboard::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load configuration: {}", error);
            return ExitCode::FAILURE;
        }
    };
    if let Err(error) = config.validate() {
        eprintln!("Invalid configuration: {}", error);
        return ExitCode::FAILURE;
    }
    if let Err(error) = telemetry::init_tracing(&config.logging) {
        eprintln!("Failed to initialize tracing: {}", error);
    }

    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(config.storage.session_path()));
    let roster: Arc<dyn RosterStore> = Arc::new(FileRosterStore::new(config.storage.roster_path()));

    tracing::info!(
        session_file = %config.storage.session_path().display(),
        roster_file = %config.storage.roster_path().display(),
        policy = ?config.scoring.policy,
        "Starting chouette"
    );

    let session = match RestoreSessionHandler::new(store).handle().await {
        Ok(result) => result.session,
        Err(error) => {
            tracing::error!(%error, "Could not prepare a session");
            return ExitCode::FAILURE;
        }
    };

    let players = match roster.all_players().await {
        Ok(players) => players,
        Err(error) => {
            tracing::warn!(%error, "Roster unavailable, showing player ids");
            Vec::new()
        }
    };

    log_table(&session, &players);
    ExitCode::SUCCESS
}

fn log_table(session: &ChouetteSession, players: &[Player]) {
    let name_of = |id: &PlayerId| {
        players
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.name.to_string())
            .unwrap_or_else(|| id.to_string())
    };

    let box_player = session.box_player().map(&name_of).unwrap_or_else(|| "-".to_string());
    let captain = session.captain().map(&name_of).unwrap_or_else(|| "-".to_string());
    let queue: Vec<String> = session.queue().iter().map(&name_of).collect();

    tracing::info!(
        session_id = %session.id(),
        mode = %session.mode(),
        %box_player,
        %captain,
        ?queue,
        "Current table"
    );

    for (rank, (id, score)) in session.standings().iter().enumerate() {
        tracing::info!(
            rank = rank + 1,
            player = %name_of(id),
            score = *score,
            sitting_out = session.is_sitting_out(id),
            "Standing"
        );
    }
}
