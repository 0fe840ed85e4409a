//! The read-only introspection capability.

use crate::builtins::builtin_class;
use crate::decl::{ClassDecl, FieldDecl, InterfaceDecl, MethodDecl};
use crate::error::AcquireError;
use crate::universe::TypeUniverse;
use rpcdoc_common::limits::SUPPORTED_SNAPSHOT_VERSIONS;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A class known to the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownClass<'u> {
    Declared(&'u ClassDecl),
    Interface(&'u InterfaceDecl),
    Builtin(&'static str),
}

impl<'u> KnownClass<'u> {
    pub fn qualified_name(&self) -> &'u str {
        match *self {
            KnownClass::Declared(class) => &class.name,
            KnownClass::Interface(interface) => &interface.name,
            KnownClass::Builtin(name) => name,
        }
    }

    pub fn declaration(&self) -> Option<&'u ClassDecl> {
        match *self {
            KnownClass::Declared(class) => Some(class),
            KnownClass::Interface(_) | KnownClass::Builtin(_) => None,
        }
    }
}

/// Handle over a [`TypeUniverse`], acquired once and shared by reference.
///
/// Holds only borrowed data, so it is `Send + Sync` and concurrent read-only
/// calls need no locking.
#[derive(Debug)]
pub struct Introspector<'u> {
    universe: &'u TypeUniverse,
    classes: FxHashMap<&'u str, &'u ClassDecl>,
    interfaces: FxHashMap<&'u str, &'u InterfaceDecl>,
}

impl<'u> Introspector<'u> {
    /// Validate the snapshot and index its declarations.
    ///
    /// Must succeed before any resolution call; callers treat failure as fatal.
    pub fn acquire(universe: &'u TypeUniverse) -> Result<Self, AcquireError> {
        if !SUPPORTED_SNAPSHOT_VERSIONS.contains(&universe.format_version) {
            return Err(AcquireError::UnsupportedVersion {
                found: universe.format_version,
                supported: SUPPORTED_SNAPSHOT_VERSIONS,
            });
        }

        let mut classes = FxHashMap::default();
        for class in &universe.classes {
            if classes.insert(class.name.as_str(), class).is_some() {
                return Err(AcquireError::DuplicateClass(class.name.clone()));
            }
        }

        let mut interfaces = FxHashMap::default();
        for interface in &universe.interfaces {
            if interfaces
                .insert(interface.name.as_str(), interface)
                .is_some()
            {
                return Err(AcquireError::DuplicateInterface(interface.name.clone()));
            }
        }

        debug!(
            classes = classes.len(),
            interfaces = interfaces.len(),
            "introspector acquired"
        );
        Ok(Introspector {
            universe,
            classes,
            interfaces,
        })
    }

    /// Interfaces in snapshot order.
    pub fn interfaces(&self) -> impl Iterator<Item = &'u InterfaceDecl> + 'u {
        self.universe.interfaces.iter()
    }

    pub fn interface(&self, name: &str) -> Option<&'u InterfaceDecl> {
        self.interfaces.get(name).copied()
    }

    pub fn class(&self, name: &str) -> Option<&'u ClassDecl> {
        self.classes.get(name).copied()
    }

    /// Locate a type by fully qualified name: declared classes, then declared
    /// interfaces, then platform classes.
    pub fn lookup_class(&self, name: &str) -> Option<KnownClass<'u>> {
        if let Some(class) = self.class(name) {
            return Some(KnownClass::Declared(class));
        }
        if let Some(interface) = self.interface(name) {
            return Some(KnownClass::Interface(interface));
        }
        builtin_class(name).map(KnownClass::Builtin)
    }

    // Raw signature accessors. Signatures are read on every query, never cached.

    pub fn method_signature<'m>(&self, method: &'m MethodDecl) -> Option<&'m str> {
        method.signature.as_deref().filter(|sig| !sig.is_empty())
    }

    pub fn field_signature<'f>(&self, field: &'f FieldDecl) -> Option<&'f str> {
        field.signature.as_deref().filter(|sig| !sig.is_empty())
    }

    pub fn class_signature<'c>(&self, class: &'c ClassDecl) -> Option<&'c str> {
        class.signature.as_deref().filter(|sig| !sig.is_empty())
    }
}

#[cfg(test)]
#[path = "../tests/introspector_tests.rs"]
mod tests;
