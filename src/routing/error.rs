//! Routing error types.

use thiserror::Error;

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors raised by route registration, lookup and URI generation.
///
/// A path that matches no route is not an error; see
/// [`Router::find_by_path`](crate::routing::Router::find_by_path).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// No route is registered under this name.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// URI generation could not resolve a placeholder.
    #[error("a value for \"{param}\" must be provided to generate a URI for route: {route}")]
    MissingParameter { route: String, param: String },

    /// The pattern or one of its constraints does not compile.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl RoutingError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        RoutingError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
