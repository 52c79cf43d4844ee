//! Discovery service facade.
//!
//! Pulls every provider's route table, expands wildcard patterns through the
//! inspector, and caches the sorted result for the lifetime of the service
//! instance.

use crate::discovery::inspector;
use crate::discovery::registry::UrlRegistry;
use crate::discovery::wildcard::WILDCARD;
use crate::error::{OpscopeError, Result};
use once_cell::sync::OnceCell;
use opscope_api::RouteMappingProvider;
use std::sync::Arc;

/// Discovers the endpoint paths reachable through a set of route-mapping
/// providers.
///
/// The scan runs once per instance, on first access; the registry it
/// produces is immutable afterwards. Provider changes after the first
/// computation are not reflected.
pub struct UrlDiscoveryService {
    providers: Option<Vec<Arc<dyn RouteMappingProvider>>>,
    urls: OnceCell<UrlRegistry>,
}

impl UrlDiscoveryService {
    /// A service with no providers yet; `management_urls` fails until
    /// `set_providers` is called.
    pub fn new() -> Self {
        Self {
            providers: None,
            urls: OnceCell::new(),
        }
    }

    pub fn with_providers(providers: Vec<Arc<dyn RouteMappingProvider>>) -> Self {
        Self {
            providers: Some(providers),
            urls: OnceCell::new(),
        }
    }

    /// Supply the providers to scan. Has no effect on an already computed
    /// result.
    pub fn set_providers(&mut self, providers: Vec<Arc<dyn RouteMappingProvider>>) {
        self.providers = Some(providers);
    }

    /// The sorted, deduplicated endpoint set, computed on first call and
    /// cached for every later one.
    pub fn management_urls(&self) -> Result<&UrlRegistry> {
        let providers = self.providers.as_deref().ok_or_else(|| {
            OpscopeError::Configuration("no route mapping providers supplied".to_string())
        })?;

        Ok(self.urls.get_or_init(|| Self::scan(providers)))
    }

    fn scan(providers: &[Arc<dyn RouteMappingProvider>]) -> UrlRegistry {
        tracing::debug!("Inspecting to find management urls...");
        let mut registry = UrlRegistry::new();

        for provider in providers {
            for (pattern, handler) in provider.mappings() {
                if !pattern.contains(WILDCARD) {
                    tracing::debug!(
                        "Adding {} without further inspection because it is not a wildcard url",
                        pattern
                    );
                    registry.insert(pattern);
                } else {
                    tracing::debug!("Inspecting for urls under {}...", pattern);
                    registry.extend(inspector::expand(&pattern, handler.as_ref()));
                }
            }
        }

        tracing::debug!("Inspection of management urls complete");
        registry
    }
}

impl Default for UrlDiscoveryService {
    fn default() -> Self {
        Self::new()
    }
}
