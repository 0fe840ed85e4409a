//! Descriptors consumed by the document serializer.

use rpcdoc_signature::TypeNode;
use serde::Serialize;

pub const DEFAULT_TAG_NAME: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::new(DEFAULT_TAG_NAME, "")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_node: TypeNode,
}

/// One documented method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    pub path: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: TypeNode,
    pub tag: Tag,
}

/// A member left out of a descriptor, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedMember {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDescriptor {
    pub name: String,
    pub path: String,
    pub tag: Tag,
    pub operations: Vec<OperationDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_node: TypeNode,
}

/// Properties of one entity class under a given substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedMember>,
}
