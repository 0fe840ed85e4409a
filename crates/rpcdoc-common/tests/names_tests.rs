use super::*;

#[test]
fn test_simple_name_source_and_internal_forms() {
    assert_eq!(simple_name("java.util.List"), "List");
    assert_eq!(simple_name("java/util/List"), "List");
    assert_eq!(simple_name("Foo"), "Foo");
}

#[test]
fn test_simple_name_keeps_binary_nested_marker() {
    // `$` is part of the binary name, not a separator.
    assert_eq!(simple_name("com.example.Outer$Inner"), "Outer$Inner");
}

#[test]
fn test_raw_class_name_discards_parameterization() {
    assert_eq!(
        raw_class_name("com.example.Page<com.example.Foo>"),
        "com.example.Page"
    );
    assert_eq!(raw_class_name("com.example.Page"), "com.example.Page");
    assert_eq!(raw_class_name("  com.example.Page "), "com.example.Page");
}

#[test]
fn test_erased_element_name_unwraps_arrays() {
    assert_eq!(erased_element_name("com.example.Foo[][]"), "com.example.Foo");
    assert_eq!(erased_element_name("int[]"), "int");
    assert_eq!(erased_element_name("java.lang.String"), "java.lang.String");
}
