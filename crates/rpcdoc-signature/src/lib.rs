//! Generic signature parsing for rpcdoc.
//!
//! The JVM erases generics at compile time but keeps the full declaration in
//! each member's `Signature` attribute. This crate turns those raw strings
//! into a parse tree ([`TypeDesc`]) and reduces the tree to the
//! documentation-facing [`TypeNode`].
//!
//! - [`parser`] - recursive descent over method, field and class signatures
//! - [`types`] - one variant per grammar production
//! - [`type_tree`] - the reducer from descriptors to type trees

pub mod error;
pub use error::SignatureError;

pub mod parser;
pub use parser::{
    ClassSignature, MethodSignature, SignatureParser, parse_field_signature,
    parse_method_signature,
};

pub mod types;
pub use types::{ClassTypeDesc, PathSegment, PrimitiveKind, TypeArg, TypeDesc, TypeParam};

pub mod type_tree;
pub use type_tree::{TypeNode, build_type_tree, parameter_type_trees};
