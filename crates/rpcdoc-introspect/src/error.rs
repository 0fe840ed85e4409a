use rpcdoc_signature::SignatureError;
use thiserror::Error;

/// Startup failure: the universe cannot back an [`Introspector`](crate::Introspector).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("unsupported snapshot format version {found} (supported: {supported:?})")]
    UnsupportedVersion {
        found: u32,
        supported: &'static [u32],
    },
    #[error("class `{0}` is declared more than once")]
    DuplicateClass(String),
    #[error("interface `{0}` is declared more than once")]
    DuplicateInterface(String),
}

/// Per-member resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error("type variable `{variable}` of field `{field}` is bound to `{class}`, which cannot be located")]
    UnresolvedType {
        field: String,
        variable: String,
        class: String,
    },
}
