pub mod method;

pub use method::{MethodDescriptor, ParamKind, ReturnKind, Visibility};
