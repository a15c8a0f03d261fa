//! Interfaces between the router and the host request pipeline.
//!
//! The host calls [`Router::handle`](crate::routing::Router::handle) once
//! per request. The router reads the request through [`RoutedRequest`],
//! reports through an optional [`RouteLogger`] and writes its resolution
//! into a [`Pipeline`].

use serde::Serialize;

use crate::routing::params::{ActionArgs, ParamMap};

/// The parts of an inbound request the router reads.
pub trait RoutedRequest {
    fn method(&self) -> &str;

    /// Normalized path, without scheme, host or query.
    fn path(&self) -> &str;
}

/// Diagnostic sink for routing outcomes.
pub trait RouteLogger {
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
}

/// Request-scoped state the router writes its resolution into.
pub trait Pipeline {
    /// The resolved action, if any stage has set one.
    fn action(&self) -> Option<&str>;
    fn set_action(&mut self, action: String);

    /// Arguments passed to the action.
    fn args_mut(&mut self) -> &mut ActionArgs;

    /// Request query parameters.
    fn query_params_mut(&mut self) -> &mut ParamMap;

    /// Name of the route matched for this request.
    fn current_route(&self) -> Option<&str>;
    fn set_current_route(&mut self, name: String);
}

/// Method and path pair, for hosts without a richer request type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub method: String,
    pub path: String,
}

impl PathRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}

impl RoutedRequest for PathRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// The bundled [`Pipeline`]: one value per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub action: Option<String>,
    pub args: ActionArgs,
    pub query: ParamMap,
    pub route: Option<String>,
}

impl Exchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the query parameters already parsed off the request.
    pub fn with_query(query: ParamMap) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }
}

impl Pipeline for Exchange {
    fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    fn set_action(&mut self, action: String) {
        self.action = Some(action);
    }

    fn args_mut(&mut self) -> &mut ActionArgs {
        &mut self.args
    }

    fn query_params_mut(&mut self) -> &mut ParamMap {
        &mut self.query
    }

    fn current_route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    fn set_current_route(&mut self, name: String) {
        self.route = Some(name);
    }
}
