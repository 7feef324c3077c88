//! Questbound engine - main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questbound_engine::infrastructure::{clock::SystemClock, sqlite::SqliteStore};
use questbound_engine::{App, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questbound_engine=debug,questbound_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Questbound engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        database = %config.database_url,
        level_up = %config.settings.level_up,
        cancelled_rewards = %config.settings.cancelled_rewards,
        leaderboard_size = config.leaderboard_size,
        "Configuration loaded"
    );

    let store = SqliteStore::connect(&config.database_url).await?;
    let app = App::new(
        Arc::new(store),
        Arc::new(SystemClock),
        config.settings,
        config.leaderboard_size,
    );

    let top = app.use_cases.character.leaderboard.top().await?;
    tracing::info!(characters = top.len(), "Leaderboard loaded");
    for entry in top.iter().take(10) {
        tracing::info!(leaderboard_entry = %serde_json::to_string(entry)?);
    }

    Ok(())
}

/// Load `.env.local` then `.env` from the workspace root, if present.
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
