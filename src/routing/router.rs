//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Hold the registered routes in priority order
//! - Find the first route matching a path
//! - Install the resolution into the request pipeline
//! - Generate URIs by route name
//!
//! # Design Decisions
//! - Routes are registered through `&mut self`; request handling only needs
//!   `&self`, so a router shared via `Arc` is read-only at request time
//! - O(n) scan in registration order, first match wins
//! - No match is `None`, not an error
//! - The current route lives in the request's pipeline, not in the router

use crate::config::RouteConfig;
use crate::routing::error::Result;
use crate::routing::params::ParamValues;
use crate::routing::route::Route;
use crate::routing::stage::{Pipeline, RouteLogger, RoutedRequest};
use crate::routing::table::RouteTable;

/// A successful lookup: the route name and a route value carrying the
/// captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: String,
    pub route: Route,
}

/// Path router over an ordered [`RouteTable`].
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: RouteTable,
}

impl Router {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Build a router from route definitions, in file order.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self> {
        let mut table = RouteTable::new();
        for config in routes {
            let route = Route::builder(config.pattern.as_str(), config.action.as_str())
                .constraints(config.constraints.clone())
                .defaults(config.defaults.clone())
                .args(config.args.clone())
                .build()?;
            table.insert(config.name.as_str(), route);
        }
        tracing::debug!(routes = table.len(), "Route table built");
        Ok(Self::new(table))
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Register a route; see [`RouteTable::insert`] for replacement order.
    pub fn add(&mut self, name: impl Into<String>, route: Route) -> Option<Route> {
        self.routes.insert(name, route)
    }

    /// Find the first route, in registration order, matching all of `path`.
    pub fn find_by_path(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|(name, route)| {
            route.match_path(path).map(|route| RouteMatch {
                name: name.to_string(),
                route,
            })
        })
    }

    /// Resolve `request` and write the result into `pipeline`.
    ///
    /// Does nothing if the pipeline already has an action. On a match, the
    /// route's arguments and parameter values are merged into the pipeline,
    /// overriding keys already present.
    pub fn handle<R, P>(
        &self,
        request: &R,
        pipeline: &mut P,
        logger: Option<&dyn RouteLogger>,
    ) -> Option<RouteMatch>
    where
        R: RoutedRequest + ?Sized,
        P: Pipeline + ?Sized,
    {
        if pipeline.action().is_some() {
            return None;
        }

        let method = request.method();
        let path = request.path();

        let Some(found) = self.find_by_path(path) else {
            if let Some(logger) = logger {
                logger.warn(&format!("Route not found for request: {method} {path}"));
            }
            return None;
        };

        pipeline.set_current_route(found.name.clone());

        if let Some(logger) = logger {
            logger.info(&format!(
                "Route \"{}\" matched for request: {method} {path}",
                found.name
            ));
        }

        pipeline.set_action(found.route.action().to_string());
        pipeline.args_mut().merge(found.route.action_args());
        pipeline.query_params_mut().merge(found.route.values());

        Some(found)
    }

    /// Name of the route matched for the request behind `pipeline`.
    pub fn current<'p, P: Pipeline + ?Sized>(&self, pipeline: &'p P) -> Option<&'p str> {
        pipeline.current_route()
    }

    /// The registered route matched for the request behind `pipeline`.
    pub fn current_route<P: Pipeline + ?Sized>(&self, pipeline: &P) -> Option<&Route> {
        pipeline
            .current_route()
            .and_then(|name| self.routes.get(name).ok())
    }

    /// Generate a URI for the route registered as `name`.
    pub fn uri(&self, name: &str, params: &ParamValues) -> Result<String> {
        self.routes.get(name)?.uri_for(name, params)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::routing::error::RoutingError;
    use crate::routing::stage::{Exchange, PathRequest};

    #[derive(Default)]
    struct RecordingLogger {
        warnings: RefCell<Vec<String>>,
        infos: RefCell<Vec<String>>,
    }

    impl RouteLogger for RecordingLogger {
        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn info(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }
    }

    fn router() -> Router {
        let mut router = Router::default();
        router.add(
            "user_show",
            Route::builder("/users/:id", "UserShow")
                .constraint("id", "[0-9]+")
                .default_value("format", "html")
                .arg("layout", "main")
                .build()
                .unwrap(),
        );
        router.add("user_any", Route::new("/users/:slug", "UserBySlug").unwrap());
        router
    }

    #[test]
    fn test_find_by_path_first_wins() {
        let router = router();

        let found = router.find_by_path("/users/42").unwrap();
        assert_eq!(found.name, "user_show");
        assert_eq!(found.route.values().get("id"), Some("42"));

        let found = router.find_by_path("/users/alice").unwrap();
        assert_eq!(found.name, "user_any");
        assert_eq!(found.route.values().get("slug"), Some("alice"));

        assert!(router.find_by_path("/posts").is_none());
    }

    #[test]
    fn test_find_by_path_does_not_mutate_table() {
        let router = router();
        let first = router.find_by_path("/users/42").unwrap();
        let second = router.find_by_path("/users/42").unwrap();

        assert_eq!(first, second);
        assert_eq!(router.routes().get("user_show").unwrap().values().get("id"), None);
    }

    #[test]
    fn test_handle_no_match() {
        let router = router();
        let logger = RecordingLogger::default();
        let mut exchange = Exchange::new();

        let found = router.handle(&PathRequest::new("GET", "/nope"), &mut exchange, Some(&logger));

        assert!(found.is_none());
        assert_eq!(exchange.action, None);
        assert_eq!(router.current(&exchange), None);
        assert_eq!(
            *logger.warnings.borrow(),
            vec!["Route not found for request: GET /nope".to_string()]
        );
        assert!(logger.infos.borrow().is_empty());
    }

    #[test]
    fn test_handle_match_populates_pipeline() {
        let router = router();
        let logger = RecordingLogger::default();
        let mut exchange = Exchange::new();
        exchange.args.insert("layout", "plain");
        exchange.query.insert("id", "stale");
        exchange.query.insert("page", "2");

        router
            .handle(&PathRequest::new("GET", "/users/42/"), &mut exchange, Some(&logger))
            .unwrap();

        assert_eq!(exchange.action.as_deref(), Some("UserShow"));
        assert_eq!(exchange.args.get("layout"), Some("main"));
        assert_eq!(exchange.query.get("id"), Some("42"));
        assert_eq!(exchange.query.get("format"), Some("html"));
        assert_eq!(exchange.query.get("page"), Some("2"));
        assert_eq!(router.current(&exchange), Some("user_show"));
        assert_eq!(
            router.current_route(&exchange).map(Route::pattern),
            Some("/users/:id")
        );
        assert_eq!(logger.infos.borrow().len(), 1);
        assert!(logger.warnings.borrow().is_empty());
    }

    #[test]
    fn test_handle_skips_resolved_pipeline() {
        let router = router();
        let logger = RecordingLogger::default();
        let mut exchange = Exchange::new();
        exchange.action = Some("Preset".into());

        assert!(router
            .handle(&PathRequest::new("GET", "/users/42"), &mut exchange, Some(&logger))
            .is_none());
        assert_eq!(exchange.action.as_deref(), Some("Preset"));
        assert!(logger.infos.borrow().is_empty());
        assert!(logger.warnings.borrow().is_empty());
    }

    #[test]
    fn test_handle_without_logger() {
        let router = router();
        let mut exchange = Exchange::new();
        assert!(router.handle(&PathRequest::new("GET", "/nope"), &mut exchange, None).is_none());
        assert!(router.handle(&PathRequest::new("GET", "/users/1"), &mut exchange, None).is_some());
    }

    #[test]
    fn test_uri_by_name() {
        let router = router();
        let params: ParamValues = [("id", "7"), ("sort", "asc")].into_iter().collect();
        assert_eq!(router.uri("user_show", &params).unwrap(), "/users/7?sort=asc");

        assert_eq!(
            router.uri("missing", &params).unwrap_err(),
            RoutingError::RouteNotFound("missing".into())
        );
        assert_eq!(
            router.uri("user_any", &ParamValues::new()).unwrap_err(),
            RoutingError::MissingParameter {
                route: "user_any".into(),
                param: "slug".into(),
            }
        );
    }
}
