//! Path router HTTP host.
//!
//! Loads a route file and answers every request with the route it resolves
//! to.
//!
//! ```text
//!     Client Request
//!     ─────────────▶ axum app (trace, timeout layers)
//!                        │
//!                        ▼
//!                    Router::handle (routing stage)
//!                        │
//!     Client Response    ▼
//!     ◀───────────── JSON resolution / 404
//! ```
//!
//! Usage: `path-router [ROUTES_FILE]` (default `routes.toml`).

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use path_router::config::load_config;
use path_router::observability::init_logging;
use path_router::{HttpServer, Router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("routes.toml"));

    let config = load_config(&path)?;
    init_logging(&config.observability)?;
    // logging is configured from the route file, so report the load only now
    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Route file loaded");

    tracing::info!("path-router v{} starting", env!("CARGO_PKG_VERSION"));

    let router = Arc::new(Router::from_config(&config.routes)?);

    tracing::info!(
        path = %path.display(),
        routes = router.routes().len(),
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(&config.server, router);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
