use rpcdoc_introspect::ResolveError;
use rpcdoc_signature::SignatureError;
use thiserror::Error;

/// Errors that abort documentation of a whole interface or entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error(
        "interface `{interface}` must declare a non-empty service path to be documented"
    )]
    MissingServicePath { interface: String },
    #[error("class `{0}` is not declared in the type universe")]
    UnknownClass(String),
    #[error("class `{class}`: {source}")]
    ClassSignature {
        class: String,
        #[source]
        source: SignatureError,
    },
}

/// Errors confined to a single method or field; the rest of the interface or
/// entity is still documented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    #[error("method `{method}`: {source}")]
    Method {
        method: String,
        #[source]
        source: SignatureError,
    },
    #[error(
        "method `{method}` declares {declared} parameters but its signature has {signature}"
    )]
    ParameterCountMismatch {
        method: String,
        declared: usize,
        signature: usize,
    },
    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: ResolveError,
    },
}

impl MemberError {
    /// Name of the member the error belongs to.
    pub fn member(&self) -> &str {
        match self {
            MemberError::Method { method, .. }
            | MemberError::ParameterCountMismatch { method, .. } => method,
            MemberError::Field { field, .. } => field,
        }
    }
}
