//! Serialized type universe.

use crate::decl::{ClassDecl, InterfaceDecl};
use serde::{Deserialize, Serialize};

fn default_format_version() -> u32 {
    1
}

/// Snapshot of the interfaces and classes visible to the documentation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeUniverse {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl Default for TypeUniverse {
    fn default() -> Self {
        TypeUniverse {
            format_version: default_format_version(),
            interfaces: Vec::new(),
            classes: Vec::new(),
        }
    }
}

impl TypeUniverse {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn with_class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_interface(mut self, interface: InterfaceDecl) -> Self {
        self.interfaces.push(interface);
        self
    }
}
