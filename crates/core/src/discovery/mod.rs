//! Endpoint discovery engine.
//!
//! Walks every registered route-mapping provider, expands wildcard patterns
//! through handler capability probes, and accumulates the reachable endpoint
//! paths into a sorted, deduplicated registry.

pub mod handlers;
pub mod inspector;
pub mod registry;
pub mod routes;
pub mod service;
pub mod wildcard;

pub use handlers::{AnnotatedHandler, MultiActionHandler, SimpleHandler};
pub use registry::UrlRegistry;
pub use routes::StaticRouteProvider;
pub use service::UrlDiscoveryService;
