use serde::{Deserialize, Serialize};

/// Visibility of a handler action method, as reported by the host framework.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Coarse classification of a method's return type.
///
/// `View` is the canonical "renders a view" result type of the host web
/// framework; everything else collapses to `Other`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    View,
    Other,
}

/// Coarse classification of a method parameter's type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Request,
    Response,
    Other,
}

/// Signature summary of a candidate action method on a route handler.
///
/// Hosts build these from whatever introspection facility they have; the
/// discovery engine only ever looks at the four fields below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub return_kind: ReturnKind,
    pub param_kinds: Vec<ParamKind>,
}

impl MethodDescriptor {
    pub fn new(
        name: impl Into<String>,
        visibility: Visibility,
        return_kind: ReturnKind,
        param_kinds: Vec<ParamKind>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            return_kind,
            param_kinds,
        }
    }
}
