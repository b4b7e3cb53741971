//! rxerp API Server
//!
//! Main entry point for the ledger backend service.

use std::sync::Arc;

use anyhow::Context;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rxerp_api::sessions::{MemorySessionStore, SessionStore};
use rxerp_api::{AppState, create_router};
use rxerp_core::ledger::{LedgerService, LedgerStore, MemoryStore};
use rxerp_db::migration::Migrator;
use rxerp_db::{PostgresLedgerStore, SessionRepository, connect_with};
use rxerp_shared::config::{LogFormat, StorageBackend};
use rxerp_shared::{AppConfig, Role, SessionContext};

/// Email the demo session signs in as.
const DEMO_EMAIL: &str = "admin@ctrlfreak.com";

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rxerp=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(config.logging.format);

    let (store, sessions): (Arc<dyn LedgerStore>, Arc<dyn SessionStore>) =
        match config.storage.backend {
            StorageBackend::Postgres => {
                let database = config.require_database()?;
                let db = connect_with(database).await?;
                info!("Connected to database");

                if database.run_migrations {
                    Migrator::up(&db, None).await?;
                    info!("Migrations applied");
                }

                (
                    Arc::new(PostgresLedgerStore::new(&db)),
                    Arc::new(SessionRepository::new(db)),
                )
            }
            StorageBackend::Memory => {
                warn!("Using in-memory storage; ledger data is lost on restart");
                let sessions = MemorySessionStore::new();
                if let Some(token) = &config.session.demo_token {
                    sessions.insert(token.clone(), SessionContext::new(DEMO_EMAIL, Role::Admin));
                    info!(email = DEMO_EMAIL, "Demo session registered");
                }
                (Arc::new(MemoryStore::new()), Arc::new(sessions))
            }
        };

    let state = AppState::new(
        LedgerService::new(store),
        sessions,
        config.access.ledger_policy(),
        config.session.cookie_name.as_str(),
    );
    info!(roles = ?state.access.roles(), "Ledger access policy loaded");

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
