//! Ordered route registry.
//!
//! Registration order is match priority: when two routes match the same
//! path, the one registered first wins. Re-registering a name replaces the
//! route but keeps the priority slot of the original registration.

use crate::routing::error::{Result, RoutingError};
use crate::routing::route::Route;

/// Named routes in priority order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<(String, Route)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `route` under `name`, returning the route it replaced.
    pub fn insert(&mut self, name: impl Into<String>, route: Route) -> Option<Route> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, route)),
            None => {
                self.entries.push((name, route));
                None
            }
        }
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Result<&Route> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, route)| route)
            .ok_or_else(|| RoutingError::RouteNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Route> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Routes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Route)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (N, Route)>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        table.extend(iter);
        table
    }
}

impl<N: Into<String>> Extend<(N, Route)> for RouteTable {
    fn extend<I: IntoIterator<Item = (N, Route)>>(&mut self, iter: I) {
        for (name, route) in iter {
            self.insert(name, route);
        }
    }
}
