pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

use crate::api::image_proxy::failed_url_cache::FailedUrlCache;
use crate::routes::build_router;
use crate::state::AppState;

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = caddie_config::Config::load()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.logging.file.as_ref().map(std::path::PathBuf::from);
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting caddie-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();
    config.warn_on_missing();

    // Initialize database pool. Without DATABASE_URL the server still
    // boots on a transient in-memory database so guarded endpoints can
    // answer with their "not configured" message.
    let pool = match config.database.url {
        Some(ref url) => {
            info!("Connecting to database: {}", url);
            SqlitePoolOptions::new()
                .max_connections(10)
                .connect_with(
                    SqliteConnectOptions::from_str(url)?
                        .create_if_missing(true)
                        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                        .busy_timeout(std::time::Duration::from_secs(5)),
                )
                .await?
        }
        None => {
            warn!("DATABASE_URL not set, using a transient in-memory database");
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(":memory:")
                .await?
        }
    };

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    caddie_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    let bind_addr = config.server.bind_addr;

    // Build application state
    let app_state = AppState {
        pool,
        config: Arc::new(config),
        failed_images: Arc::new(FailedUrlCache::new()),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
