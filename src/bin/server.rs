//! Rota HTTP Server Binary
//!
//! Entry point for the rota REST API server. It initializes the repository,
//! loads the optional seed document, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository, seeded from a JSON document
//! ROTA_DATA=data/rota.json cargo run --bin rota-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0, or `[server] host` in rota.toml)
//! - `PORT`: Server port (default: 8080, or `[server] port` in rota.toml)
//! - `ROTA_DATA`: Path to a seed JSON document (overrides `[seed] path`)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use club_rota::db::{self, RotaConfig};
use club_rota::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting rota HTTP server");

    // Optional config file; environment variables win over it below.
    let config = match RotaConfig::from_default_location() {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("No config file loaded: {}", e);
            None
        }
    };

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Seed the repository when a document is configured
    let seed_path = env::var("ROTA_DATA")
        .ok()
        .or_else(|| config.as_ref().and_then(|c| c.seed.path.clone()));
    if let Some(path) = seed_path {
        let stored = db::load_seed_file(repository.as_ref(), &path).await?;
        info!("Seeded {} schedules from {}", stored, path);
    }

    // Create application state and router
    let state = AppState::new(repository);
    let app = create_router(state);

    // Determine bind address: env > config file > defaults
    let server_settings = config.map(|c| c.server).unwrap_or_default();
    let host = env::var("HOST").unwrap_or(server_settings.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(server_settings.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
