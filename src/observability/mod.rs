//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router::handle diagnostics
//!     → logging.rs (TracingLogger → tracing events)
//! HTTP host
//!     → tower-http TraceLayer spans, request id fields
//!
//! Consumers:
//!     → stdout (text or JSON lines)
//! ```

pub mod logging;

pub use logging::{init_logging, TracingLogger};
