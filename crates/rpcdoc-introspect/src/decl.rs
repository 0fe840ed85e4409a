//! Declarations of the documented interfaces and entity classes.
//!
//! Field names follow the snapshot format. Annotation values are plain
//! optional attributes: `service_path` is the JSON-RPC service path,
//! `api` the tag annotation, `description` the operation description and
//! `alias` the parameter or property alias.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    /// Fully qualified interface name.
    pub name: String,
    #[serde(default)]
    pub service_path: Option<String>,
    #[serde(default)]
    pub api: Option<ApiAnnotation>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

/// Tag annotation: ordered tag names plus one display value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAnnotation {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    /// Raw generic signature; absent when the method uses no generics.
    #[serde(default)]
    pub signature: Option<String>,
    /// Erased return type, e.g. `com.example.Foo[]` or `void`.
    pub return_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    /// Erased declared type.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    /// Erased declared type (the bound's erasure for a type-variable field).
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        FieldDecl {
            name: name.into(),
            type_name: type_name.into(),
            signature: None,
            alias: None,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
