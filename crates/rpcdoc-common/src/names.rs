//! Qualified type name helpers.
//!
//! Names reach rpcdoc in three spellings: the source form (`com.example.Foo`),
//! the internal form used inside signatures (`com/example/Foo`) and the
//! erased display form of arrays (`com.example.Foo[]`). These helpers work on
//! all of them without allocating.

/// Separators between package and nested-class segments.
const SEGMENT_SEPARATORS: [char; 2] = ['.', '/'];

/// Return the last segment of a qualified name.
///
/// `java.util.List` and `java/util/List` both yield `List`.
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit(SEGMENT_SEPARATORS)
        .next()
        .unwrap_or(qualified)
}

/// Strip any generic parameterization from a class name.
///
/// `com.example.Page<com.example.Foo>` yields `com.example.Page`.
pub fn raw_class_name(name: &str) -> &str {
    match name.find('<') {
        Some(idx) => name[..idx].trim_end(),
        None => name.trim(),
    }
}

/// Strip trailing array brackets from an erased type name.
///
/// `com.example.Foo[][]` yields `com.example.Foo`.
pub fn erased_element_name(name: &str) -> &str {
    let mut current = name.trim_end();
    while let Some(stripped) = current.strip_suffix("[]") {
        current = stripped.trim_end();
    }
    current
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod tests;
