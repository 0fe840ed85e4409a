//! Parse tree for raw generic signatures.
//!
//! Each type mirrors one production of the JVM signature grammar:
//!
//! ```text
//! TypeDesc   := ClassType | ArrayType | TypeVarRef | Primitive
//! ArrayType  := "[" TypeDesc
//! ClassType  := "L" Segment {("." | "/") Segment} ";"
//! Segment    := Identifier ["<" {TypeArg} ">"]
//! TypeArg    := "*" | ("+" | "-") TypeDesc | TypeDesc
//! TypeVarRef := "T" Identifier ";"
//! ```

use rpcdoc_common::names::simple_name;
use std::fmt;

/// A single type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// `Lcom/example/Foo<...>;`
    Class(ClassTypeDesc),
    /// `[` followed by the component descriptor.
    Array(Box<TypeDesc>),
    /// `TT;` - reference to a type variable by name.
    TypeVar(String),
    /// One of the single-character primitive markers.
    Primitive(PrimitiveKind),
}

impl TypeDesc {
    /// Name of the referenced type variable, if this is a bare `TypeVarRef`.
    pub fn as_type_var(&self) -> Option<&str> {
        match self {
            TypeDesc::TypeVar(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassTypeDesc> {
        match self {
            TypeDesc::Class(class) => Some(class),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Class(class) => write!(f, "{class}"),
            TypeDesc::Array(component) => write!(f, "{component}[]"),
            TypeDesc::TypeVar(name) => f.write_str(name),
            TypeDesc::Primitive(kind) => f.write_str(kind.keyword()),
        }
    }
}

/// A class type: a path of segments, each optionally parameterized.
///
/// Package components are segments without arguments, so
/// `Ljava/util/Map$Entry<TK;TV;>;` has the segments `java`, `util` and
/// `Map$Entry<K, V>`, while `Lcom/example/Outer<TT;>.Inner;` has arguments on
/// an outer segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTypeDesc {
    pub segments: Vec<PathSegment>,
}

impl ClassTypeDesc {
    /// The innermost (last) segment, which names the class.
    pub fn innermost(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Dotted source-form name of the class, without type arguments.
    pub fn qualified_name(&self) -> String {
        let mut name = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                name.push('.');
            }
            name.push_str(&segment.name);
        }
        name
    }

    /// Simple name of the class (the innermost segment's name).
    pub fn simple_name(&self) -> &str {
        self.innermost()
            .map(|segment| simple_name(&segment.name))
            .unwrap_or_default()
    }

    /// Type arguments attached to the innermost segment.
    pub fn type_args(&self) -> &[TypeArg] {
        self.innermost()
            .map(|segment| segment.args.as_slice())
            .unwrap_or_default()
    }

    /// Whether any segment other than the innermost carries type arguments.
    pub fn has_outer_type_args(&self) -> bool {
        let outer = self.segments.len().saturating_sub(1);
        self.segments[..outer]
            .iter()
            .any(|segment| !segment.args.is_empty())
    }
}

impl fmt::Display for ClassTypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&segment.name)?;
            if !segment.args.is_empty() {
                f.write_str("<")?;
                for (j, arg) in segment.args.iter().enumerate() {
                    if j > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub name: String,
    pub args: Vec<TypeArg>,
}

impl PathSegment {
    pub fn new(name: impl Into<String>) -> Self {
        PathSegment {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// A type argument inside `<...>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    /// `*` - unbounded wildcard.
    Any,
    /// `+T` - `? extends T`.
    Extends(TypeDesc),
    /// `-T` - `? super T`.
    Super(TypeDesc),
    /// A plain argument.
    Exact(TypeDesc),
}

impl TypeArg {
    /// The descriptor an argument is bounded by, if any.
    pub fn bound(&self) -> Option<&TypeDesc> {
        match self {
            TypeArg::Any => None,
            TypeArg::Extends(desc) | TypeArg::Super(desc) | TypeArg::Exact(desc) => Some(desc),
        }
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Any => f.write_str("?"),
            TypeArg::Extends(desc) => write!(f, "? extends {desc}"),
            TypeArg::Super(desc) => write!(f, "? super {desc}"),
            TypeArg::Exact(desc) => write!(f, "{desc}"),
        }
    }
}

/// Primitive markers. `Void` is only valid as a method return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
    Void,
}

impl PrimitiveKind {
    /// Decode a primitive marker. `V` is not accepted here; see [`PrimitiveKind::Void`].
    pub fn from_marker(marker: u8) -> Option<Self> {
        Some(match marker {
            b'B' => PrimitiveKind::Byte,
            b'C' => PrimitiveKind::Char,
            b'D' => PrimitiveKind::Double,
            b'F' => PrimitiveKind::Float,
            b'I' => PrimitiveKind::Int,
            b'J' => PrimitiveKind::Long,
            b'S' => PrimitiveKind::Short,
            b'Z' => PrimitiveKind::Boolean,
            _ => return None,
        })
    }

    /// The Java keyword spelling (`int`, `boolean`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Void => "void",
        }
    }
}

/// A formal type parameter: `T:Ljava/lang/Object;` or `T::Ljava/lang/Comparable<TT;>;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParam {
    pub name: String,
    /// Class bound; absent when only interface bounds are declared.
    pub class_bound: Option<TypeDesc>,
    pub interface_bounds: Vec<TypeDesc>,
}
