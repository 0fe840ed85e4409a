//! Host type introspection for rpcdoc.
//!
//! A [`TypeUniverse`] is the serialized view of the annotated interfaces and
//! entity classes being documented, with every member's raw compiled
//! signature. An [`Introspector`] is acquired from it exactly once at
//! startup and then passed explicitly to everything that needs to read
//! signatures or look classes up.

pub mod builtins;

pub mod decl;
pub use decl::{ApiAnnotation, ClassDecl, FieldDecl, InterfaceDecl, MethodDecl, ParameterDecl};

pub mod error;
pub use error::{AcquireError, ResolveError};

pub mod introspector;
pub use introspector::{Introspector, KnownClass};

pub mod resolve;
pub use resolve::{
    ConcreteType, SubstitutionContext, field_type_variable, resolve_field_type, type_parameters,
};

pub mod universe;
pub use universe::TypeUniverse;
