//! Attribute lookups with fallback defaults.

use crate::descriptor::Tag;
use crate::error::MetadataError;
use rpcdoc_introspect::{FieldDecl, InterfaceDecl, MethodDecl, ParameterDecl};
use tracing::debug;

/// The interface's service path with adjacent `/` collapsed.
pub fn service_path(interface: &InterfaceDecl) -> Result<String, MetadataError> {
    debug!(interface = %interface.name, "service_path");
    match interface.service_path.as_deref() {
        Some(path) if !path.trim().is_empty() => Ok(collapse_separators(path.trim())),
        _ => Err(MetadataError::MissingServicePath {
            interface: interface.name.clone(),
        }),
    }
}

fn collapse_separators(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

pub fn operation_description(method: &MethodDecl) -> String {
    method.description.clone().unwrap_or_default()
}

/// Alias if present and non-empty, else the declared name.
pub fn parameter_name(parameter: &ParameterDecl) -> &str {
    non_empty(parameter.alias.as_deref()).unwrap_or(&parameter.name)
}

/// Alias if present and non-empty, else the declared name.
pub fn field_name(field: &FieldDecl) -> &str {
    non_empty(field.alias.as_deref()).unwrap_or(&field.name)
}

/// First declared tag name with the interface's display value.
pub fn tag(interface: &InterfaceDecl) -> Tag {
    debug!(interface = %interface.name, "tag");
    interface
        .api
        .as_ref()
        .and_then(|api| {
            api.tags
                .first()
                .map(|first| Tag::new(first.as_str(), api.value.as_str()))
        })
        .unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "../tests/extract_tests.rs"]
mod tests;
