//! Reduction of signature descriptors into documentation type trees.

use crate::error::SignatureError;
use crate::parser::parse_method_signature;
use crate::types::{TypeArg, TypeDesc};
use rpcdoc_common::names::{erased_element_name, simple_name};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Erasure of an unbounded wildcard.
const UNBOUNDED_WILDCARD_NAME: &str = "Object";

/// One node of a resolved type tree.
///
/// Arrays never appear as nodes: `Foo[]` and `Foo` produce the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeNode {
    pub name: String,
    pub children: Vec<TypeNode>,
}

impl TypeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        TypeNode {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<TypeNode>) -> Self {
        TypeNode {
            name: name.into(),
            children,
        }
    }

    /// Leaf node for an erased declared type such as `com.example.Foo[]` or `int`.
    pub fn from_erased(type_name: &str) -> Self {
        TypeNode::leaf(simple_name(erased_element_name(type_name)))
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.children.is_empty() {
            f.write_str("<")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Reduce one descriptor into a [`TypeNode`].
///
/// No resolution happens here: a type variable argument becomes a node named
/// after the variable (`T`), not its erased bound.
pub fn build_type_tree(desc: &TypeDesc) -> TypeNode {
    match desc {
        TypeDesc::Array(component) => build_type_tree(component),
        TypeDesc::Class(class) => {
            if class.has_outer_type_args() {
                // Only the innermost segment's arguments are documented.
                debug!(class = %class, "dropping type arguments of outer class segments");
            }
            let children = class.type_args().iter().map(build_type_arg).collect();
            TypeNode::with_children(class.simple_name(), children)
        }
        TypeDesc::TypeVar(name) => TypeNode::leaf(name.as_str()),
        TypeDesc::Primitive(kind) => TypeNode::leaf(kind.keyword()),
    }
}

fn build_type_arg(arg: &TypeArg) -> TypeNode {
    match arg.bound() {
        Some(bound) => build_type_tree(bound),
        None => TypeNode::leaf(UNBOUNDED_WILDCARD_NAME),
    }
}

/// Type trees for every parameter of a method, in declaration order.
///
/// Returns an empty list when the method carries no generic signature.
/// Callers that also need the return tree parse a
/// [`MethodSignature`](crate::MethodSignature) and map [`build_type_tree`]
/// over its parameters, which gives the same trees.
pub fn parameter_type_trees(raw: Option<&str>) -> Result<Vec<TypeNode>, SignatureError> {
    debug!(signature = ?raw, "parameter_type_trees");
    let params = parse_method_signature(raw)?;
    Ok(params.iter().map(build_type_tree).collect())
}

#[cfg(test)]
#[path = "../tests/type_tree_tests.rs"]
mod tests;
