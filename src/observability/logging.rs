//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Forward router diagnostics to `tracing`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Log level from config, overridden by `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::routing::RouteLogger;

/// Install the global tracing subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("path_router={},tower_http=info", config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}

/// [`RouteLogger`] that emits `tracing` events under the `path_router` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RouteLogger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "path_router::routing", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "path_router::routing", "{}", message);
    }
}
