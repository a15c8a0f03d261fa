//! Route definitions.
//!
//! # Responsibilities
//! - Own a pattern and keep its compiled matcher in sync
//! - Carry the action identifier and its static arguments
//! - Generate concrete URIs from parameter values
//!
//! # Design Decisions
//! - The matcher is derived, never set directly; every mutator recompiles
//!   before committing and leaves the route untouched on error
//! - Matching produces a new route value; the registered one is not mutated

use url::form_urlencoded;

use crate::routing::error::{Result, RoutingError};
use crate::routing::params::{ActionArgs, ParamConstraints, ParamValues};
use crate::routing::pattern::{Pattern, Segment};

/// A pattern bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: Pattern,
    constraints: ParamConstraints,
    values: ParamValues,
    action: String,
    action_args: ActionArgs,
}

impl Route {
    /// Create a route with no defaults, constraints or arguments.
    pub fn new(pattern: &str, action: impl Into<String>) -> Result<Self> {
        Self::builder(pattern, action).build()
    }

    /// Start building a route.
    pub fn builder(pattern: impl Into<String>, action: impl Into<String>) -> RouteBuilder {
        RouteBuilder {
            pattern: pattern.into(),
            action: action.into(),
            constraints: ParamConstraints::new(),
            values: ParamValues::new(),
            action_args: ActionArgs::new(),
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The compiled matcher.
    pub fn matcher(&self) -> &Pattern {
        &self.pattern
    }

    pub fn constraints(&self) -> &ParamConstraints {
        &self.constraints
    }

    /// Bound values; on a matched route these include the captured ones.
    pub fn values(&self) -> &ParamValues {
        &self.values
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn action_args(&self) -> &ActionArgs {
        &self.action_args
    }

    /// Placeholder names in order of appearance.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.pattern.param_names()
    }

    /// Replace the pattern, recompiling the matcher.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        self.pattern = Pattern::compile(pattern, &self.constraints)?;
        Ok(())
    }

    /// Replace all constraints, recompiling the matcher.
    pub fn set_constraints(&mut self, constraints: ParamConstraints) -> Result<()> {
        self.pattern = Pattern::compile(self.pattern.as_str(), &constraints)?;
        self.constraints = constraints;
        Ok(())
    }

    /// Set one constraint, recompiling the matcher.
    pub fn set_constraint(&mut self, name: &str, constraint: &str) -> Result<()> {
        let mut constraints = self.constraints.clone();
        constraints.insert(name, constraint);
        self.set_constraints(constraints)
    }

    /// Bind a default value for a placeholder.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name, value);
    }

    /// Match `path` against this route.
    ///
    /// On success, returns a copy whose values are the bound values with the
    /// captured ones laid over them. `self` is never modified.
    pub fn match_path(&self, path: &str) -> Option<Route> {
        let captured = self.pattern.captures(path)?;
        let mut matched = self.clone();
        matched.values.merge(&captured);
        Some(matched)
    }

    /// Generate a URI from `params`, falling back to bound values.
    ///
    /// Params that fill a placeholder are consumed; the rest become the
    /// query string. Errors name the pattern; [`Router::uri`] names the
    /// route instead.
    ///
    /// [`Router::uri`]: crate::routing::Router::uri
    pub fn uri(&self, params: &ParamValues) -> Result<String> {
        self.uri_for(self.pattern(), params)
    }

    pub(crate) fn uri_for(&self, route_name: &str, params: &ParamValues) -> Result<String> {
        let mut remaining = params.clone();
        let mut uri = String::with_capacity(self.pattern().len());

        for segment in self.pattern.segments() {
            match segment {
                Segment::Literal(text) => uri.push_str(text),
                Segment::Param(name) => {
                    let value = match remaining.remove(name) {
                        Some(value) => value,
                        None => self
                            .values
                            .get(name)
                            .map(str::to_string)
                            .ok_or_else(|| RoutingError::MissingParameter {
                                route: route_name.to_string(),
                                param: name.clone(),
                            })?,
                    };
                    uri.push_str(&value);
                }
            }
        }

        if !remaining.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(remaining.iter())
                .finish();
            uri.push('?');
            uri.push_str(&query);
        }

        Ok(uri)
    }
}

/// Builder for [`Route`]; the pattern is compiled once in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    pattern: String,
    action: String,
    constraints: ParamConstraints,
    values: ParamValues,
    action_args: ActionArgs,
}

impl RouteBuilder {
    /// Constrain a placeholder with a regular expression.
    pub fn constraint(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.constraints.insert(name, expr);
        self
    }

    pub fn constraints(mut self, constraints: ParamConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Bind a default value for a placeholder.
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name, value);
        self
    }

    pub fn defaults(mut self, values: ParamValues) -> Self {
        self.values = values;
        self
    }

    /// Add a static action argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.action_args.insert(name, value);
        self
    }

    pub fn args(mut self, args: ActionArgs) -> Self {
        self.action_args = args;
        self
    }

    pub fn build(self) -> Result<Route> {
        let pattern = Pattern::compile(&self.pattern, &self.constraints)?;
        Ok(Route {
            pattern,
            constraints: self.constraints,
            values: self.values,
            action: self.action,
            action_args: self.action_args,
        })
    }
}
