//! HTTP host for the router.
//!
//! # Responsibilities
//! - Create the axum app with a single fallback handler
//! - Run the routing stage once per request
//! - Answer with the resolution as JSON, 404 when nothing matched
//! - Wire up middleware (tracing, timeout)

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{query_params, request_id, request_id_header, X_REQUEST_ID};
use crate::observability::TracingLogger;
use crate::routing::{Exchange, Router as PathRouter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<PathRouter>,
}

/// JSON body returned for every request.
#[derive(Debug, Serialize)]
struct ResolutionBody<'a> {
    request_id: &'a str,
    #[serde(flatten)]
    exchange: &'a Exchange,
}

/// HTTP server exposing route resolution.
pub struct HttpServer {
    app: Router,
}

impl HttpServer {
    /// Create a server over a shared router.
    pub fn new(config: &ServerConfig, router: Arc<PathRouter>) -> Self {
        let state = AppState { router };
        Self {
            app: Self::build_app(config, state),
        }
    }

    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(resolve_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The axum app, for embedding or in-process testing.
    pub fn into_app(self) -> Router {
        self.app
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the request path and describe the outcome.
async fn resolve_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(&request);
    let mut exchange = Exchange::with_query(query_params(&request));

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Resolving request"
    );

    let status = match state.router.handle(&request, &mut exchange, Some(&TracingLogger)) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    };

    let body = ResolutionBody {
        request_id: &request_id,
        exchange: &exchange,
    };
    let mut response = (status, Json(body)).into_response();
    if let Some(value) = request_id_header(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received");
}
