//! rpcdoc - API descriptions for JSON-RPC services.
//!
//! Facade over the workspace crates:
//! - [`signature`] parses raw generic signatures into type trees
//! - [`introspect`] models the type universe and resolves type variables
//! - [`metadata`] extracts annotations and assembles operation descriptors

pub use rpcdoc_common as common;
pub use rpcdoc_introspect as introspect;
pub use rpcdoc_metadata as metadata;
pub use rpcdoc_signature as signature;

// Tracing subscriber setup for binaries
pub mod tracing_config;
