use std::net::TcpListener;
use std::sync::Arc;
use secrecy::ExposeSecret;

use worldcup_tracker::run;
use worldcup_tracker::config::settings::get_config;
use worldcup_tracker::db::{load_fixtures, MemoryStore, TournamentStore};
use worldcup_tracker::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "worldcup-tracker".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    if config.admin.api_token.expose_secret().is_empty() {
        tracing::warn!("ADMIN_API_TOKEN is not set, admin routes will reject every request");
    }

    let store: Arc<dyn TournamentStore> = match &config.fixtures.path {
        Some(path) => match load_fixtures(path) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!("❌ Failed to load fixtures from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("No fixture file configured, starting with an empty tournament");
            Arc::new(MemoryStore::new())
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("✅ Listening on {}", address);

    run(
        listener,
        store,
        config.admin,
        config.standings,
        config.cors
    )?.await
}
