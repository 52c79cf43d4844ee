//! Handler classification and wildcard-pattern expansion.
//!
//! A handler is expanded by the first strategy whose shape it satisfies:
//! multiplexing handlers by their explicit action map or, failing that,
//! their requestable methods; everything else by declared method paths,
//! falling back to a single substituted endpoint for plain single-endpoint
//! handlers.

use crate::discovery::wildcard::substitute;
use opscope_api::{MethodDescriptor, ParamKind, ReturnKind, RouteHandler, Visibility};

/// Expand a wildcard route pattern into the concrete paths reachable through
/// `handler`. A handler matching no strategy contributes nothing; that is
/// not an error.
pub fn expand(pattern: &str, handler: &dyn RouteHandler) -> Vec<String> {
    if handler.is_multiplexing() {
        // An explicit action mapping wins outright; implicit methods are not
        // also scanned.
        if let Some(mapping) = handler.explicit_mapping() {
            let mut urls = Vec::with_capacity(mapping.len());
            for action in mapping.keys() {
                let url = substitute(pattern, action);
                tracing::debug!("Adding {} due to explicit action mapping", url);
                urls.push(url);
            }
            return urls;
        }

        let mut urls = Vec::new();
        for method in handler.methods() {
            if is_requestable(&method) {
                let url = substitute(pattern, &method.name);
                tracing::debug!("Adding {} due to implicit action method {}", url, method.name);
                urls.push(url);
            }
        }
        return urls;
    }

    let mut urls = Vec::new();
    for method in handler.methods() {
        for url in handler.declared_paths(&method) {
            // Declared paths are absolute literals, inserted verbatim.
            tracing::debug!("Adding {} due to path declared on {}", url, method.name);
            urls.push(url);
        }
    }

    if urls.is_empty() && handler.is_single_endpoint() {
        let url = substitute(pattern, "");
        tracing::debug!(
            "Adding {} because the handler serves a single endpoint and nothing else was found",
            url
        );
        urls.push(url);
    }

    urls
}

/// A method is requestable iff it is externally visible and either returns
/// the framework's view result or takes a request then a response as its
/// first two parameters.
pub fn is_requestable(method: &MethodDescriptor) -> bool {
    let visible = matches!(method.visibility, Visibility::Public | Visibility::Protected);
    let returns_view = method.return_kind == ReturnKind::View;
    let takes_exchange = matches!(
        method.param_kinds.as_slice(),
        [ParamKind::Request, ParamKind::Response, ..]
    );
    visible && (returns_view || takes_exchange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::handlers::{AnnotatedHandler, MultiActionHandler, SimpleHandler};

    fn view_method(name: &str, visibility: Visibility) -> MethodDescriptor {
        MethodDescriptor::new(name, visibility, ReturnKind::View, vec![])
    }

    #[test]
    fn test_private_method_is_not_requestable() {
        assert!(!is_requestable(&view_method("hidden", Visibility::Private)));
        assert!(is_requestable(&view_method("shown", Visibility::Protected)));
    }

    #[test]
    fn test_request_response_signature_is_requestable() {
        let method = MethodDescriptor::new(
            "raw",
            Visibility::Public,
            ReturnKind::Other,
            vec![ParamKind::Request, ParamKind::Response, ParamKind::Other],
        );
        assert!(is_requestable(&method));

        let reversed = MethodDescriptor::new(
            "backwards",
            Visibility::Public,
            ReturnKind::Other,
            vec![ParamKind::Response, ParamKind::Request],
        );
        assert!(!is_requestable(&reversed));

        let unary = MethodDescriptor::new(
            "partial",
            Visibility::Public,
            ReturnKind::Other,
            vec![ParamKind::Request],
        );
        assert!(!is_requestable(&unary));
    }

    #[test]
    fn test_explicit_mapping_suppresses_implicit_methods() {
        let handler = MultiActionHandler::new()
            .with_action("a", "x")
            .with_action("b", "y")
            .with_method(view_method("a", Visibility::Public))
            .with_method(view_method("b", Visibility::Public))
            .with_method(view_method("c", Visibility::Public));

        let mut urls = expand("/foo/**", &handler);
        urls.sort();
        assert_eq!(urls, vec!["/foo/a", "/foo/b"]);
    }

    #[test]
    fn test_implicit_methods_are_filtered() {
        let handler = MultiActionHandler::new()
            .with_method(view_method("visible", Visibility::Public))
            .with_method(view_method("internal", Visibility::Private))
            .with_method(MethodDescriptor::new(
                "helper",
                Visibility::Public,
                ReturnKind::Other,
                vec![ParamKind::Other],
            ));

        assert_eq!(expand("/admin/**", &handler), vec!["/admin/visible"]);
    }

    #[test]
    fn test_declared_paths_beat_single_endpoint_fallback() {
        let handler = AnnotatedHandler::new()
            .with_method_paths(
                view_method("dispatch", Visibility::Public),
                vec!["/exact".to_string(), "/other".to_string()],
            )
            .with_single_endpoint(true);

        assert_eq!(expand("/bar/**", &handler), vec!["/exact", "/other"]);
    }

    #[test]
    fn test_single_endpoint_fallback_fires_when_nothing_declared() {
        assert_eq!(expand("/bar/**", &SimpleHandler), vec!["/bar"]);
    }

    #[test]
    fn test_multiplexing_wins_over_single_endpoint_shape() {
        // A handler can satisfy both shapes; the multiplexing branch returns
        // first and the fallback never fires.
        struct Both;
        impl RouteHandler for Both {
            fn is_multiplexing(&self) -> bool {
                true
            }
            fn methods(&self) -> Vec<MethodDescriptor> {
                vec![MethodDescriptor::new(
                    "only",
                    Visibility::Public,
                    ReturnKind::View,
                    vec![],
                )]
            }
            fn is_single_endpoint(&self) -> bool {
                true
            }
        }

        assert_eq!(expand("/dual/**", &Both), vec!["/dual/only"]);
    }

    #[test]
    fn test_unclassifiable_handler_contributes_nothing() {
        struct Opaque;
        impl RouteHandler for Opaque {}

        assert!(expand("/mystery/**", &Opaque).is_empty());
    }
}
