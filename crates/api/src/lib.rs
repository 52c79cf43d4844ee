pub mod files;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use files::AppFileProvider;
pub use models::*;
pub use routes::{RouteHandler, RouteMapping, RouteMappingProvider};
