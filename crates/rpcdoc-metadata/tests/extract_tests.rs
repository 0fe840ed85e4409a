use super::*;
use rpcdoc_introspect::{ApiAnnotation, FieldDecl, InterfaceDecl, MethodDecl, ParameterDecl};

fn interface(path: Option<&str>, api: Option<ApiAnnotation>) -> InterfaceDecl {
    InterfaceDecl {
        name: "com.example.BillingApi".to_string(),
        service_path: path.map(str::to_string),
        api,
        methods: Vec::new(),
    }
}

fn parameter(alias: Option<&str>) -> ParameterDecl {
    ParameterDecl {
        name: "annotationDto1".to_string(),
        type_name: "com.example.AnnotationDto".to_string(),
        alias: alias.map(str::to_string),
    }
}

#[test]
fn test_service_path_collapses_separators() {
    assert_eq!(
        service_path(&interface(Some("//v1//foo"), None)).unwrap(),
        "/v1/foo"
    );
    assert_eq!(
        service_path(&interface(Some("/v1///foo/"), None)).unwrap(),
        "/v1/foo/"
    );
    assert_eq!(
        service_path(&interface(Some("/v1/annotation"), None)).unwrap(),
        "/v1/annotation"
    );
}

#[test]
fn test_missing_service_path() {
    for path in [None, Some(""), Some("   ")] {
        assert_eq!(
            service_path(&interface(path, None)),
            Err(MetadataError::MissingServicePath {
                interface: "com.example.BillingApi".to_string()
            })
        );
    }
}

#[test]
fn test_tag_defaults() {
    assert_eq!(tag(&interface(None, None)), Tag::new("default", ""));

    let no_tags = ApiAnnotation {
        tags: Vec::new(),
        value: "ignored".to_string(),
    };
    assert_eq!(tag(&interface(None, Some(no_tags))), Tag::default());
}

#[test]
fn test_tag_takes_first_name_and_value() {
    let api = ApiAnnotation {
        tags: vec!["billing".to_string(), "invoices".to_string()],
        value: "Billing API".to_string(),
    };
    assert_eq!(
        tag(&interface(None, Some(api))),
        Tag::new("billing", "Billing API")
    );
}

#[test]
fn test_parameter_name_prefers_alias() {
    assert_eq!(
        parameter_name(&parameter(Some("annotation_dto_from_annotation"))),
        "annotation_dto_from_annotation"
    );
    assert_eq!(parameter_name(&parameter(Some(""))), "annotationDto1");
    assert_eq!(parameter_name(&parameter(None)), "annotationDto1");
}

#[test]
fn test_field_name_prefers_alias() {
    let field = FieldDecl::new("createdAt", "java.time.Instant");
    assert_eq!(field_name(&field), "createdAt");
    assert_eq!(field_name(&field.clone().with_alias("created_at")), "created_at");
    assert_eq!(field_name(&field.with_alias("")), "createdAt");
}

#[test]
fn test_operation_description_default() {
    let mut method = MethodDecl {
        name: "save".to_string(),
        signature: None,
        return_type: "void".to_string(),
        description: None,
        parameters: Vec::new(),
    };
    assert_eq!(operation_description(&method), "");
    method.description = Some("Save entity".to_string());
    assert_eq!(operation_description(&method), "Save entity");
}
