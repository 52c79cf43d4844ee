//! Stock route-handler implementations.
//!
//! Hosts with their own handler objects implement [`RouteHandler`] directly;
//! these cover the common shapes so simple hosts and tests don't have to.

use indexmap::IndexMap;
use opscope_api::{MethodDescriptor, RouteHandler};

/// A multiplexing handler dispatching to named sub-actions under its
/// pattern, either through an explicit action map or through introspected
/// methods.
#[derive(Debug, Default, Clone)]
pub struct MultiActionHandler {
    actions: Option<IndexMap<String, String>>,
    methods: Vec<MethodDescriptor>,
}

impl MultiActionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an explicit sub-action mapping. Once any action is present,
    /// introspected methods are ignored by discovery.
    pub fn with_action(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.actions
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), target.into());
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

impl RouteHandler for MultiActionHandler {
    fn is_multiplexing(&self) -> bool {
        true
    }

    fn explicit_mapping(&self) -> Option<IndexMap<String, String>> {
        self.actions.clone()
    }

    fn methods(&self) -> Vec<MethodDescriptor> {
        self.methods.clone()
    }
}

/// A non-multiplexing handler whose methods may carry explicitly declared
/// literal paths. May additionally serve a single endpoint at its pattern,
/// used only when no method declares a path.
#[derive(Debug, Default, Clone)]
pub struct AnnotatedHandler {
    methods: Vec<(MethodDescriptor, Vec<String>)>,
    single_endpoint: bool,
}

impl AnnotatedHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(self, method: MethodDescriptor) -> Self {
        self.with_method_paths(method, Vec::new())
    }

    pub fn with_method_paths(mut self, method: MethodDescriptor, paths: Vec<String>) -> Self {
        self.methods.push((method, paths));
        self
    }

    pub fn with_single_endpoint(mut self, single_endpoint: bool) -> Self {
        self.single_endpoint = single_endpoint;
        self
    }
}

impl RouteHandler for AnnotatedHandler {
    fn methods(&self) -> Vec<MethodDescriptor> {
        self.methods.iter().map(|(method, _)| method.clone()).collect()
    }

    fn declared_paths(&self, method: &MethodDescriptor) -> Vec<String> {
        self.methods
            .iter()
            .find(|(candidate, _)| candidate == method)
            .map(|(_, paths)| paths.clone())
            .unwrap_or_default()
    }

    fn is_single_endpoint(&self) -> bool {
        self.single_endpoint
    }
}

/// A bare handler serving exactly one endpoint at its pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleHandler;

impl RouteHandler for SimpleHandler {
    fn is_single_endpoint(&self) -> bool {
        true
    }
}
