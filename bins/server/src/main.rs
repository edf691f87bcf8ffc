//! Ledgerfeed API Server
//!
//! Main entry point for the Ledgerfeed backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerfeed_api::{AppState, create_router};
use ledgerfeed_core::clock::SystemClock;
use ledgerfeed_shared::AppConfig;
use ledgerfeed_store::{MemoryStore, TransactionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerfeed=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Set up the store
    let store = Arc::new(MemoryStore::new());
    if config.feed.seed_demo {
        let seed = store.seed_demo().await;
        info!(user = %seed.user, "Demo data seeded");
    }

    // Create the lifecycle manager
    let manager = TransactionManager::new(store, Arc::new(SystemClock));

    // Create application state
    let state = AppState {
        manager: Arc::new(manager),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
