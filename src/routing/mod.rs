//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (scan routes in registration order)
//!     → route.rs / pattern.rs (anchored match, capture parameters)
//!     → Return: RouteMatch (name + route with captured values) or None
//!
//! Route Compilation (at startup):
//!     RouteConfig[] / Route::builder
//!     → pattern.rs (placeholders → named capture groups)
//!     → table.rs (ordered by registration)
//!     → Router shared read-only by request handlers
//!
//! URI Generation:
//!     route name + params
//!     → table.rs (lookup by name)
//!     → route.rs (fill placeholders, leftovers → query string)
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at registration; a bad pattern fails there, not at
//!   first match
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by registration)

pub mod error;
pub mod params;
pub mod pattern;
pub mod route;
pub mod router;
pub mod stage;
pub mod table;

pub use error::{Result, RoutingError};
pub use params::{ActionArgs, ParamConstraints, ParamMap, ParamValues};
pub use pattern::{extract_param_names, Pattern, DEFAULT_CONSTRAINT};
pub use route::{Route, RouteBuilder};
pub use router::{RouteMatch, Router};
pub use stage::{Exchange, PathRequest, Pipeline, RouteLogger, RoutedRequest};
pub use table::RouteTable;
