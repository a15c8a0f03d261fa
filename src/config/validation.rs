//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate route names
//! - Check that every pattern compiles with its constraints
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{Pattern, RoutingError};

/// A semantic problem in a route file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route \"{name}\" is defined more than once")]
    DuplicateName { name: String },

    #[error("route \"{name}\" has an empty pattern")]
    EmptyPattern { name: String },

    #[error("route \"{name}\": pattern \"{pattern}\" must start with '/'")]
    RelativePattern { name: String, pattern: String },

    #[error("route \"{name}\" has an empty action")]
    EmptyAction { name: String },

    #[error("route \"{name}\": {source}")]
    Pattern { name: String, source: RoutingError },

    #[error("server request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, route) in config.routes.iter().enumerate() {
        let name = route.name.clone();

        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(name.clone()) {
            errors.push(ValidationError::DuplicateName { name: name.clone() });
        }

        if route.action.trim().is_empty() {
            errors.push(ValidationError::EmptyAction { name: name.clone() });
        }

        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { name });
            continue;
        }

        if !route.pattern.starts_with('/') {
            errors.push(ValidationError::RelativePattern {
                name: name.clone(),
                pattern: route.pattern.clone(),
            });
        }

        if let Err(source) = Pattern::compile(&route.pattern, &route.constraints) {
            errors.push(ValidationError::Pattern { name, source });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
