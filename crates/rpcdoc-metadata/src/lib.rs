//! API metadata extraction for rpcdoc.
//!
//! Reads the declarative attributes of annotated service interfaces (service
//! path, tag, operation description, parameter and property aliases) and
//! combines them with the type trees from `rpcdoc-signature` and
//! `rpcdoc-introspect` into the descriptors handed to a document serializer.

pub mod descriptor;
pub use descriptor::{
    EntityDescriptor, FieldDescriptor, InterfaceDescriptor, OperationDescriptor,
    ParameterDescriptor, SkippedMember, Tag,
};

pub mod entity;
pub use entity::{describe_entity, entity_context};

pub mod error;
pub use error::{MemberError, MetadataError};

pub mod extract;
pub use extract::{field_name, operation_description, parameter_name, service_path, tag};

pub mod operation;
pub use operation::{describe_interface, describe_operation};
