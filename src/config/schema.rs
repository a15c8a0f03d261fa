//! Configuration schema definitions.
//!
//! This module defines the route file structure. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::{ActionArgs, ParamConstraints, ParamValues};

/// Root configuration: routes plus the host settings around them.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// HTTP host settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in priority order.
    pub routes: Vec<RouteConfig>,
}

/// HTTP host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route name, used for URI generation.
    pub name: String,

    /// Path pattern with `:name` placeholders.
    pub pattern: String,

    /// Action identifier installed on match.
    pub action: String,

    /// Placeholder constraints (regular expressions).
    #[serde(default)]
    pub constraints: ParamConstraints,

    /// Default placeholder values.
    #[serde(default)]
    pub defaults: ParamValues,

    /// Static action arguments.
    #[serde(default)]
    pub args: ActionArgs,
}

impl RouteConfig {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            action: action.into(),
            constraints: ParamConstraints::new(),
            defaults: ParamValues::new(),
            args: ActionArgs::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
