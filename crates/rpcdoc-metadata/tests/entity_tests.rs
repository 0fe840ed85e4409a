use super::*;
use rpcdoc_introspect::TypeUniverse;

fn page_universe() -> TypeUniverse {
    TypeUniverse::default()
        .with_class(ClassDecl {
            name: "com.example.Page".to_string(),
            signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;".to_string()),
            fields: vec![
                FieldDecl::new("item", "java.lang.Object").with_signature("TT;"),
                FieldDecl::new("items", "java.util.List")
                    .with_signature("Ljava/util/List<TT;>;")
                    .with_alias("page_items"),
                FieldDecl::new("total", "long"),
            ],
        })
        .with_class(ClassDecl {
            name: "com.example.Invoice".to_string(),
            signature: None,
            fields: vec![FieldDecl::new("number", "java.lang.String")],
        })
}

#[test]
fn test_entity_with_bound_variable() {
    let universe = page_universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let page = introspector.class("com.example.Page").unwrap();
    let context = entity_context(&introspector, page, &["com.example.Invoice"]).unwrap();

    let entity = describe_entity(&introspector, "com.example.Page", &context).unwrap();
    assert_eq!(entity.name, "com.example.Page");
    assert!(entity.skipped.is_empty());
    assert_eq!(
        entity.fields,
        vec![
            FieldDescriptor {
                name: "item".to_string(),
                type_node: TypeNode::leaf("Invoice"),
            },
            FieldDescriptor {
                name: "page_items".to_string(),
                type_node: TypeNode::with_children("List", vec![TypeNode::leaf("T")]),
            },
            FieldDescriptor {
                name: "total".to_string(),
                type_node: TypeNode::leaf("long"),
            },
        ]
    );
}

#[test]
fn test_entity_with_unbound_variable_uses_erased_type() {
    let universe = page_universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let entity =
        describe_entity(&introspector, "com.example.Page", &SubstitutionContext::new()).unwrap();
    assert_eq!(entity.fields[0].type_node, TypeNode::leaf("Object"));
}

#[test]
fn test_entity_skips_unresolvable_field() {
    let universe = page_universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let context: SubstitutionContext = [("T", "does.not.Exist")].into_iter().collect();

    let entity = describe_entity(&introspector, "com.example.Page", &context).unwrap();
    assert_eq!(entity.fields.len(), 2);
    assert_eq!(entity.skipped.len(), 1);
    assert_eq!(entity.skipped[0].name, "item");
    assert!(entity.skipped[0].reason.contains("does.not.Exist"));
}

#[test]
fn test_unknown_entity() {
    let universe = page_universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    assert_eq!(
        describe_entity(&introspector, "com.example.Missing", &SubstitutionContext::new()),
        Err(MetadataError::UnknownClass("com.example.Missing".to_string()))
    );
}

#[test]
fn test_entity_context_for_non_generic_class_is_empty() {
    let universe = page_universe();
    let introspector = Introspector::acquire(&universe).unwrap();
    let invoice = introspector.class("com.example.Invoice").unwrap();
    let context = entity_context::<&str>(&introspector, invoice, &[]).unwrap();
    assert!(context.is_empty());
}

#[test]
fn test_entity_context_reports_malformed_class_signature() {
    let mut universe = page_universe();
    universe.classes[0].signature = Some("<T:>".to_string());
    let introspector = Introspector::acquire(&universe).unwrap();
    let page = introspector.class("com.example.Page").unwrap();
    assert!(matches!(
        entity_context(&introspector, page, &["com.example.Invoice"]),
        Err(MetadataError::ClassSignature { .. })
    ));
}
