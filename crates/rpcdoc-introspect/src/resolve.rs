//! Type-variable resolution for entity fields.
//!
//! Method parameters and returns are resolved structurally from their own
//! signatures. A field typed by an interface-level type variable (`T item;`)
//! has no call-site argument to read, so it is resolved here through an
//! explicit [`SubstitutionContext`] supplied by the caller.

use crate::decl::{ClassDecl, FieldDecl};
use crate::error::ResolveError;
use crate::introspector::Introspector;
use rpcdoc_common::names::{raw_class_name, simple_name};
use rpcdoc_signature::{ClassSignature, SignatureError, TypeNode, parse_field_signature};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

/// Type variable name -> fully qualified concrete class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionContext {
    bindings: FxHashMap<String, String>,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        SubstitutionContext::default()
    }

    /// Bind declared type parameters to arguments positionally.
    ///
    /// Extra parameters or arguments on either side are ignored.
    pub fn from_args<P, A>(params: &[P], args: &[A]) -> Self
    where
        P: AsRef<str>,
        A: AsRef<str>,
    {
        params
            .iter()
            .zip(args)
            .map(|(param, arg)| (param.as_ref().to_string(), arg.as_ref().to_string()))
            .collect()
    }

    pub fn insert(&mut self, variable: impl Into<String>, class: impl Into<String>) {
        self.bindings.insert(variable.into(), class.into());
    }

    pub fn get(&self, variable: &str) -> Option<&str> {
        self.bindings.get(variable).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SubstitutionContext {
            bindings: iter
                .into_iter()
                .map(|(variable, class)| (variable.into(), class.into()))
                .collect(),
        }
    }
}

/// A class a type variable resolved to, in raw (unparameterized) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConcreteType {
    qualified_name: String,
}

impl ConcreteType {
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    pub fn to_type_node(&self) -> TypeNode {
        TypeNode::leaf(self.simple_name())
    }
}

/// Name of the type variable a field is declared with, if its type is a bare
/// type variable (`TR;` yields `R`).
pub fn field_type_variable(
    introspector: &Introspector<'_>,
    field: &FieldDecl,
) -> Result<Option<String>, ResolveError> {
    let Some(raw) = introspector.field_signature(field) else {
        return Ok(None);
    };
    let desc = parse_field_signature(raw)?;
    Ok(desc.as_type_var().map(str::to_string))
}

/// Resolve a type-variable field to the concrete class bound in `context`.
///
/// Returns `Ok(None)` when the field is not typed by a bare type variable or
/// the variable is not bound; the caller then documents the erased type.
pub fn resolve_field_type(
    introspector: &Introspector<'_>,
    field: &FieldDecl,
    context: &SubstitutionContext,
) -> Result<Option<ConcreteType>, ResolveError> {
    debug!(field = %field.name, bindings = context.len(), "resolve_field_type");

    let Some(variable) = field_type_variable(introspector, field)? else {
        return Ok(None);
    };
    let Some(bound) = context.get(&variable) else {
        debug!(field = %field.name, variable = %variable, "type variable not bound");
        return Ok(None);
    };

    let class_name = raw_class_name(bound);
    match introspector.lookup_class(class_name) {
        Some(class) => Ok(Some(ConcreteType {
            qualified_name: class.qualified_name().to_string(),
        })),
        None => Err(ResolveError::UnresolvedType {
            field: field.name.clone(),
            variable,
            class: bound.to_string(),
        }),
    }
}

/// Formal type parameter names declared by a class, in order.
///
/// Empty when the class carries no generic signature.
pub fn type_parameters(
    introspector: &Introspector<'_>,
    class: &ClassDecl,
) -> Result<Vec<String>, SignatureError> {
    debug!(class = %class.name, "type_parameters");
    let Some(raw) = introspector.class_signature(class) else {
        return Ok(Vec::new());
    };
    let signature = ClassSignature::parse(raw)?;
    Ok(signature.type_param_names().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod tests;
