//! URL-pattern router.
//!
//! Maps request paths to named routes, extracts `:name` parameters and
//! generates URIs back from route names.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use routing::{Route, RouteMatch, RouteTable, Router, RoutingError};
