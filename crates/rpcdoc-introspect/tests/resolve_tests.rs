use super::*;
use crate::decl::{ClassDecl, FieldDecl, InterfaceDecl};
use crate::error::ResolveError;
use crate::universe::TypeUniverse;

fn universe() -> TypeUniverse {
    TypeUniverse::default()
        .with_class(ClassDecl {
            name: "com.example.Concrete".to_string(),
            signature: None,
            fields: Vec::new(),
        })
        .with_class(ClassDecl {
            name: "com.example.Page".to_string(),
            signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;".to_string()),
            fields: vec![FieldDecl::new("item", "java.lang.Object").with_signature("TT;")],
        })
        .with_interface(InterfaceDecl {
            name: "com.example.BillingApi".to_string(),
            service_path: Some("/billing".to_string()),
            api: None,
            methods: Vec::new(),
        })
}

fn type_var_field() -> FieldDecl {
    FieldDecl::new("result", "java.lang.Object").with_signature("TR;")
}

fn context(pairs: &[(&str, &str)]) -> SubstitutionContext {
    pairs.iter().copied().collect()
}

#[test]
fn test_resolves_bound_type_variable() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let resolved = resolve_field_type(
        &introspector,
        &type_var_field(),
        &context(&[("R", "com.example.Concrete")]),
    )
    .unwrap()
    .unwrap();
    assert_eq!(resolved.simple_name(), "Concrete");
    assert_eq!(resolved.qualified_name(), "com.example.Concrete");
    assert_eq!(resolved.to_type_node(), TypeNode::leaf("Concrete"));
}

#[test]
fn test_unbound_variable_is_no_result() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let resolved =
        resolve_field_type(&introspector, &type_var_field(), &SubstitutionContext::new());
    assert_eq!(resolved, Ok(None));
}

#[test]
fn test_missing_class_is_unresolved_type() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let err = resolve_field_type(
        &introspector,
        &type_var_field(),
        &context(&[("R", "does.not.Exist")]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnresolvedType {
            field: "result".to_string(),
            variable: "R".to_string(),
            class: "does.not.Exist".to_string(),
        }
    );
}

#[test]
fn test_parameterized_binding_resolves_to_raw_class() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let resolved = resolve_field_type(
        &introspector,
        &type_var_field(),
        &context(&[("R", "com.example.Page<com.example.Concrete>")]),
    )
    .unwrap()
    .unwrap();
    assert_eq!(resolved.qualified_name(), "com.example.Page");
}

#[test]
fn test_builtin_binding_resolves() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let resolved = resolve_field_type(
        &introspector,
        &type_var_field(),
        &context(&[("R", "java.lang.String")]),
    )
    .unwrap();
    assert_eq!(resolved.map(|t| t.simple_name().to_string()), Some("String".to_string()));
}

#[test]
fn test_declared_interface_binding_resolves() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let resolved = resolve_field_type(
        &introspector,
        &type_var_field(),
        &context(&[("R", "com.example.BillingApi")]),
    )
    .unwrap()
    .unwrap();
    assert_eq!(resolved.qualified_name(), "com.example.BillingApi");
    assert_eq!(resolved.to_type_node(), TypeNode::leaf("BillingApi"));
}

#[test]
fn test_non_variable_fields_are_no_result() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let ctx = context(&[("T", "com.example.Concrete")]);

    let plain = FieldDecl::new("name", "java.lang.String");
    assert_eq!(resolve_field_type(&introspector, &plain, &ctx), Ok(None));

    let generic =
        FieldDecl::new("items", "java.util.List").with_signature("Ljava/util/List<TT;>;");
    assert_eq!(resolve_field_type(&introspector, &generic, &ctx), Ok(None));
}

#[test]
fn test_malformed_field_signature() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let broken = FieldDecl::new("broken", "java.lang.Object").with_signature("TR");
    let err = resolve_field_type(&introspector, &broken, &SubstitutionContext::new());
    assert!(matches!(err, Err(ResolveError::Signature(_))));
}

#[test]
fn test_resolution_is_idempotent() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let field = type_var_field();
    let ctx = context(&[("R", "com.example.Concrete")]);
    assert_eq!(
        resolve_field_type(&introspector, &field, &ctx),
        resolve_field_type(&introspector, &field, &ctx)
    );
}

#[test]
fn test_type_parameters_from_class_signature() {
    let universe = universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let page = introspector.class("com.example.Page").unwrap();
    assert_eq!(type_parameters(&introspector, page).unwrap(), vec!["T"]);

    let concrete = introspector.class("com.example.Concrete").unwrap();
    assert!(type_parameters(&introspector, concrete).unwrap().is_empty());
}

#[test]
fn test_context_from_args() {
    let ctx = SubstitutionContext::from_args(&["K", "V"], &["java.lang.String"]);
    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.get("K"), Some("java.lang.String"));
    assert_eq!(ctx.get("V"), None);
}
