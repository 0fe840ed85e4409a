//! Entity (property-bearing class) descriptors.

use crate::descriptor::{EntityDescriptor, FieldDescriptor, SkippedMember};
use crate::error::{MemberError, MetadataError};
use crate::extract::field_name;
use rpcdoc_introspect::{
    ClassDecl, FieldDecl, Introspector, ResolveError, SubstitutionContext, resolve_field_type,
    type_parameters,
};
use rpcdoc_signature::{TypeNode, build_type_tree, parse_field_signature};
use tracing::{debug, warn};

/// Bind a class's declared type parameters to `args`, positionally.
pub fn entity_context<A: AsRef<str>>(
    introspector: &Introspector<'_>,
    class: &ClassDecl,
    args: &[A],
) -> Result<SubstitutionContext, MetadataError> {
    let params =
        type_parameters(introspector, class).map_err(|source| MetadataError::ClassSignature {
            class: class.name.clone(),
            source,
        })?;
    if params.len() != args.len() {
        debug!(
            class = %class.name,
            params = params.len(),
            args = args.len(),
            "type argument count differs from declared parameters"
        );
    }
    Ok(SubstitutionContext::from_args(&params, args))
}

/// Describe the properties of `class_name` under `context`.
///
/// Fields typed by a bound type variable document the resolved class; fields
/// whose resolution fails are skipped and recorded.
pub fn describe_entity(
    introspector: &Introspector<'_>,
    class_name: &str,
    context: &SubstitutionContext,
) -> Result<EntityDescriptor, MetadataError> {
    debug!(class = %class_name, "describe_entity");
    let class = introspector
        .class(class_name)
        .ok_or_else(|| MetadataError::UnknownClass(class_name.to_string()))?;

    let mut fields = Vec::with_capacity(class.fields.len());
    let mut skipped = Vec::new();
    for field in &class.fields {
        match describe_field(introspector, field, context) {
            Ok(descriptor) => fields.push(descriptor),
            Err(err) => {
                warn!(class = %class.name, error = %err, "skipping field");
                skipped.push(SkippedMember {
                    name: err.member().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(EntityDescriptor {
        name: class.name.clone(),
        fields,
        skipped,
    })
}

fn describe_field(
    introspector: &Introspector<'_>,
    field: &FieldDecl,
    context: &SubstitutionContext,
) -> Result<FieldDescriptor, MemberError> {
    let to_member_error = |source: ResolveError| MemberError::Field {
        field: field.name.clone(),
        source,
    };

    let type_node = match resolve_field_type(introspector, field, context).map_err(to_member_error)?
    {
        Some(concrete) => concrete.to_type_node(),
        None => declared_type_tree(introspector, field).map_err(to_member_error)?,
    };

    Ok(FieldDescriptor {
        name: field_name(field).to_string(),
        type_node,
    })
}

/// Tree of the field's declared type: structural for generic fields, the
/// erased type for plain fields and unbound type variables.
fn declared_type_tree(
    introspector: &Introspector<'_>,
    field: &FieldDecl,
) -> Result<TypeNode, ResolveError> {
    let Some(raw) = introspector.field_signature(field) else {
        return Ok(TypeNode::from_erased(&field.type_name));
    };
    let desc = parse_field_signature(raw)?;
    if desc.as_type_var().is_some() {
        return Ok(TypeNode::from_erased(&field.type_name));
    }
    Ok(build_type_tree(&desc))
}

#[cfg(test)]
#[path = "../tests/entity_tests.rs"]
mod tests;
