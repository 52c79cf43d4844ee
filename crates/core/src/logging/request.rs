//! Per-request log-severity selection.
//!
//! Requests under the management surface are chatty and uninteresting, so
//! they log at trace; everything else logs at info. Sensitive query
//! parameters are masked before the line is emitted. No interaction with the
//! discovery engine.

use std::collections::BTreeSet;
use tracing::Level;

const MASK: &str = "*****";

pub struct RequestLogPolicy {
    trace_path_prefixes: BTreeSet<String>,
    suppressed_parameters: BTreeSet<String>,
    log_parameters_on_mutating_requests: bool,
}

impl Default for RequestLogPolicy {
    fn default() -> Self {
        Self {
            trace_path_prefixes: ["/management", "/status"]
                .into_iter()
                .map(String::from)
                .collect(),
            suppressed_parameters: BTreeSet::new(),
            log_parameters_on_mutating_requests: false,
        }
    }
}

impl RequestLogPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trace_path_prefixes.insert(prefix.into());
        self
    }

    /// Mask the named query parameter's value in logged request lines.
    pub fn with_suppressed_parameter(mut self, name: impl Into<String>) -> Self {
        self.suppressed_parameters.insert(name.into());
        self
    }

    pub fn with_parameters_on_mutating_requests(mut self, enabled: bool) -> Self {
        self.log_parameters_on_mutating_requests = enabled;
        self
    }

    pub fn severity_for(&self, path: &str) -> Level {
        if self
            .trace_path_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            Level::TRACE
        } else {
            Level::INFO
        }
    }

    /// Parameters are always logged for GET requests; for mutating requests
    /// only when explicitly enabled.
    pub fn should_log_parameters(&self, method: &str) -> bool {
        method.eq_ignore_ascii_case("GET") || self.log_parameters_on_mutating_requests
    }

    /// Render `name=value` pairs as a query string, masking suppressed
    /// parameters.
    pub fn render_parameters(&self, parameters: &[(&str, &str)]) -> String {
        parameters
            .iter()
            .map(|(name, value)| {
                if self.suppressed_parameters.contains(*name) {
                    format!("{name}={MASK}")
                } else {
                    format!("{name}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Emit one line for the request at the severity its path selects.
    pub fn log_request(&self, method: &str, path: &str, parameters: &[(&str, &str)]) {
        let line = if self.should_log_parameters(method) && !parameters.is_empty() {
            format!("{} {}?{}", method, path, self.render_parameters(parameters))
        } else {
            format!("{} {}", method, path)
        };

        match self.severity_for(path) {
            Level::TRACE => tracing::trace!("{}", line),
            _ => tracing::info!("{}", line),
        }
    }
}
