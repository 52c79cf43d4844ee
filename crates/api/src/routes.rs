use crate::models::MethodDescriptor;
use indexmap::IndexMap;
use std::sync::Arc;

/// Ordered pattern → handler table registered by a single provider.
///
/// Patterns are unique within a provider and may contain the two-character
/// wildcard marker `**`.
pub type RouteMapping = IndexMap<String, Arc<dyn RouteHandler>>;

/// A source of route registrations, analogous to a router's registered
/// routes. Multiple providers may coexist; their relative order does not
/// affect the discovered result.
pub trait RouteMappingProvider: Send + Sync {
    fn mappings(&self) -> RouteMapping;
}

/// Capability probes over an otherwise opaque route handler.
///
/// A handler may satisfy several shapes at once (e.g. carry declared paths
/// and also serve a single endpoint); the discovery engine resolves which
/// shape applies. Every probe has a conservative default so hosts only
/// implement what their handler actually supports.
pub trait RouteHandler: Send + Sync {
    /// Does this handler dispatch to named sub-actions under its pattern?
    fn is_multiplexing(&self) -> bool {
        false
    }

    /// Explicit sub-action name → target mapping, when one is configured.
    fn explicit_mapping(&self) -> Option<IndexMap<String, String>> {
        None
    }

    /// Candidate action methods discoverable on the handler.
    fn methods(&self) -> Vec<MethodDescriptor> {
        Vec::new()
    }

    /// Literal paths declared directly on a method, absolute and not subject
    /// to wildcard expansion. Empty when the method declares none.
    fn declared_paths(&self, _method: &MethodDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Does this handler serve exactly one endpoint at its pattern?
    fn is_single_endpoint(&self) -> bool {
        false
    }
}
