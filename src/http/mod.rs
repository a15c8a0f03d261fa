//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum app, tracing + timeout layers)
//!     → request.rs (request ID, query parsing, RoutedRequest adapter)
//!     → Router::handle (routing stage)
//!     → JSON resolution / 404
//! ```

pub mod request;
pub mod server;

pub use request::{query_params, request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
