//! In-memory implementation of `RouteMappingProvider`.

use opscope_api::{RouteHandler, RouteMapping, RouteMappingProvider};
use std::sync::Arc;

/// A provider over a fixed pattern → handler table, registered in insertion
/// order. Patterns are unique; registering a pattern twice replaces the
/// earlier handler.
#[derive(Default, Clone)]
pub struct StaticRouteProvider {
    routes: RouteMapping,
}

impl StaticRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, pattern: impl Into<String>, handler: Arc<dyn RouteHandler>) -> Self {
        self.register(pattern, handler);
        self
    }

    pub fn register(&mut self, pattern: impl Into<String>, handler: Arc<dyn RouteHandler>) {
        self.routes.insert(pattern.into(), handler);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteMappingProvider for StaticRouteProvider {
    fn mappings(&self) -> RouteMapping {
        self.routes.clone()
    }
}
