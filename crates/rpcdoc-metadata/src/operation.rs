//! Operation descriptors for annotated service interfaces.

use crate::descriptor::{
    InterfaceDescriptor, OperationDescriptor, ParameterDescriptor, SkippedMember, Tag,
};
use crate::error::{MemberError, MetadataError};
use crate::extract::{operation_description, parameter_name, service_path, tag};
use rpcdoc_introspect::{InterfaceDecl, Introspector, MethodDecl};
use rpcdoc_signature::{MethodSignature, TypeNode, build_type_tree};
use tracing::{debug, warn};

/// Describe one method of an interface documented under `path` and `tag`.
///
/// Generic methods take their parameter and return trees from the raw
/// signature; methods without one fall back to their erased declared types.
///
/// The signature is parsed once as a full [`MethodSignature`] so the return
/// type comes from the same pass. The parameter trees are the ones
/// [`rpcdoc_signature::parameter_type_trees`] yields for that signature.
pub fn describe_operation(
    introspector: &Introspector<'_>,
    path: &str,
    tag: &Tag,
    method: &MethodDecl,
) -> Result<OperationDescriptor, MemberError> {
    debug!(method = %method.name, "describe_operation");

    let (param_types, return_type) = match introspector.method_signature(method) {
        Some(raw) => {
            let signature = MethodSignature::parse(raw).map_err(|source| MemberError::Method {
                method: method.name.clone(),
                source,
            })?;
            if signature.params.len() != method.parameters.len() {
                return Err(MemberError::ParameterCountMismatch {
                    method: method.name.clone(),
                    declared: method.parameters.len(),
                    signature: signature.params.len(),
                });
            }
            let params = signature.params.iter().map(build_type_tree).collect::<Vec<_>>();
            (params, build_type_tree(&signature.return_type))
        }
        None => {
            let params = method
                .parameters
                .iter()
                .map(|param| TypeNode::from_erased(&param.type_name))
                .collect::<Vec<_>>();
            (params, TypeNode::from_erased(&method.return_type))
        }
    };

    let parameters = method
        .parameters
        .iter()
        .zip(param_types)
        .map(|(param, type_node)| ParameterDescriptor {
            name: parameter_name(param).to_string(),
            type_node,
        })
        .collect();

    Ok(OperationDescriptor {
        path: path.to_string(),
        name: method.name.clone(),
        description: operation_description(method),
        parameters,
        return_type,
        tag: tag.clone(),
    })
}

/// Describe every method of an interface.
///
/// A missing service path aborts the interface. Per-method failures are
/// logged and recorded in [`InterfaceDescriptor::skipped`].
pub fn describe_interface(
    introspector: &Introspector<'_>,
    interface: &InterfaceDecl,
) -> Result<InterfaceDescriptor, MetadataError> {
    debug!(interface = %interface.name, "describe_interface");
    let path = service_path(interface)?;
    let tag = tag(interface);

    let mut operations = Vec::with_capacity(interface.methods.len());
    let mut skipped = Vec::new();
    for method in &interface.methods {
        match describe_operation(introspector, &path, &tag, method) {
            Ok(operation) => operations.push(operation),
            Err(err) => {
                warn!(interface = %interface.name, error = %err, "skipping method");
                skipped.push(SkippedMember {
                    name: err.member().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(InterfaceDescriptor {
        name: interface.name.clone(),
        path,
        tag,
        operations,
        skipped,
    })
}

#[cfg(test)]
#[path = "../tests/operation_tests.rs"]
mod tests;
