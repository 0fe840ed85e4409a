//! Recursive descent parser for raw generic signatures.
//!
//! ```text
//! MethodSig  := [TypeParams] "(" {TypeDesc} ")" (TypeDesc | "V") {"^" ThrowsDesc}
//! ClassSig   := [TypeParams] ClassType {ClassType}
//! FieldSig   := TypeDesc
//! TypeParams := "<" TypeParam {TypeParam} ">"
//! TypeParam  := Identifier ":" [TypeDesc] {":" TypeDesc}
//! ```
//!
//! The parser works directly on bytes. Every production is ASCII apart from
//! identifiers, which are sliced out of the source on terminator bytes, so
//! multi-byte identifier characters pass through untouched.

use crate::error::SignatureError;
use crate::types::{ClassTypeDesc, PathSegment, PrimitiveKind, TypeArg, TypeDesc, TypeParam};
use rpcdoc_common::limits::{MAX_SIGNATURE_DEPTH, MAX_SIGNATURE_LEN};
use tracing::trace;

type Result<T> = std::result::Result<T, SignatureError>;

/// Parsed method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<TypeDesc>,
    /// `TypeDesc::Primitive(PrimitiveKind::Void)` for `V`.
    pub return_type: TypeDesc,
    pub throws: Vec<TypeDesc>,
}

impl MethodSignature {
    pub fn parse(raw: &str) -> Result<Self> {
        SignatureParser::new(raw)?.parse_method()
    }
}

/// Parsed class signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
    pub type_params: Vec<TypeParam>,
    pub superclass: ClassTypeDesc,
    pub interfaces: Vec<ClassTypeDesc>,
}

impl ClassSignature {
    pub fn parse(raw: &str) -> Result<Self> {
        SignatureParser::new(raw)?.parse_class()
    }

    /// Names of the declared formal type parameters, in order.
    pub fn type_param_names(&self) -> impl Iterator<Item = &str> {
        self.type_params.iter().map(|param| param.name.as_str())
    }
}

/// Parse the parameter descriptors of a method signature.
///
/// A member that uses no generics carries no signature; `None` yields an
/// empty list rather than an error.
pub fn parse_method_signature(raw: Option<&str>) -> Result<Vec<TypeDesc>> {
    match raw {
        Some(raw) => Ok(MethodSignature::parse(raw)?.params),
        None => Ok(Vec::new()),
    }
}

/// Parse a field signature (a single type descriptor).
pub fn parse_field_signature(raw: &str) -> Result<TypeDesc> {
    SignatureParser::new(raw)?.parse_field()
}

/// Cursor over one raw signature.
pub struct SignatureParser<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: u32,
}

impl<'a> SignatureParser<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        if source.len() > MAX_SIGNATURE_LEN {
            return Err(SignatureError::malformed(
                source,
                0,
                format!("signature exceeds {MAX_SIGNATURE_LEN} bytes"),
            ));
        }
        Ok(SignatureParser {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            depth: 0,
        })
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    pub fn parse_method(mut self) -> Result<MethodSignature> {
        trace!(signature = self.source, "parse_method");
        let type_params = self.parse_optional_type_params()?;

        self.expect(b'(')?;
        let mut params = Vec::new();
        while self.peek() != Some(b')') {
            if self.at_end() {
                return Err(self.error("unterminated parameter list"));
            }
            params.push(self.parse_type_desc()?);
        }
        self.expect(b')')?;

        let return_type = if self.eat(b'V') {
            TypeDesc::Primitive(PrimitiveKind::Void)
        } else {
            self.parse_type_desc()?
        };

        let mut throws = Vec::new();
        while self.eat(b'^') {
            let thrown = self.parse_type_desc()?;
            if !matches!(thrown, TypeDesc::Class(_) | TypeDesc::TypeVar(_)) {
                return Err(self.error("throws clause must name a class or type variable"));
            }
            throws.push(thrown);
        }

        self.finish()?;
        Ok(MethodSignature {
            type_params,
            params,
            return_type,
            throws,
        })
    }

    pub fn parse_class(mut self) -> Result<ClassSignature> {
        trace!(signature = self.source, "parse_class");
        let type_params = self.parse_optional_type_params()?;
        let superclass = self.parse_class_type()?;
        let mut interfaces = Vec::new();
        while !self.at_end() {
            interfaces.push(self.parse_class_type()?);
        }
        Ok(ClassSignature {
            type_params,
            superclass,
            interfaces,
        })
    }

    pub fn parse_field(mut self) -> Result<TypeDesc> {
        trace!(signature = self.source, "parse_field");
        let desc = self.parse_type_desc()?;
        self.finish()?;
        Ok(desc)
    }

    // =========================================================================
    // Productions
    // =========================================================================

    fn parse_optional_type_params(&mut self) -> Result<Vec<TypeParam>> {
        if !self.eat(b'<') {
            return Ok(Vec::new());
        }
        let mut params = Vec::new();
        while !self.eat(b'>') {
            if self.at_end() {
                return Err(self.error("unterminated type parameter list"));
            }
            params.push(self.parse_type_param()?);
        }
        if params.is_empty() {
            return Err(self.error("empty type parameter list"));
        }
        Ok(params)
    }

    fn parse_type_param(&mut self) -> Result<TypeParam> {
        let name = self.parse_identifier()?.to_string();
        self.expect(b':')?;

        // The class bound may be empty when only interface bounds follow.
        let class_bound = match self.peek() {
            Some(b':') | Some(b'>') => None,
            _ => Some(self.parse_type_desc()?),
        };

        let mut interface_bounds = Vec::new();
        while self.eat(b':') {
            interface_bounds.push(self.parse_type_desc()?);
        }

        Ok(TypeParam {
            name,
            class_bound,
            interface_bounds,
        })
    }

    fn parse_type_desc(&mut self) -> Result<TypeDesc> {
        self.enter()?;
        let desc = match self.peek() {
            Some(b'L') => TypeDesc::Class(self.parse_class_type()?),
            Some(b'[') => {
                self.pos += 1;
                TypeDesc::Array(Box::new(self.parse_type_desc()?))
            }
            Some(b'T') => {
                self.pos += 1;
                let name = self.parse_identifier()?.to_string();
                self.expect(b';')?;
                TypeDesc::TypeVar(name)
            }
            Some(marker) => match PrimitiveKind::from_marker(marker) {
                Some(kind) => {
                    self.pos += 1;
                    TypeDesc::Primitive(kind)
                }
                None => {
                    return Err(self.error(format!(
                        "unexpected `{}` where a type was expected",
                        marker as char
                    )));
                }
            },
            None => return Err(self.error("unexpected end of signature")),
        };
        self.leave();
        Ok(desc)
    }

    fn parse_class_type(&mut self) -> Result<ClassTypeDesc> {
        self.expect(b'L')?;
        let mut segments = Vec::new();
        loop {
            let mut segment = PathSegment::new(self.parse_identifier()?);
            if self.peek() == Some(b'<') {
                segment.args = self.parse_type_args()?;
            }
            segments.push(segment);

            match self.bump() {
                Some(b'.') | Some(b'/') => continue,
                Some(b';') => break,
                Some(other) => {
                    self.pos -= 1;
                    return Err(self.error(format!(
                        "unexpected `{}` in class type",
                        other as char
                    )));
                }
                None => return Err(self.error("unterminated class type")),
            }
        }
        Ok(ClassTypeDesc { segments })
    }

    fn parse_type_args(&mut self) -> Result<Vec<TypeArg>> {
        self.expect(b'<')?;
        self.enter()?;
        let mut args = Vec::new();
        loop {
            let arg = match self.peek() {
                Some(b'>') => break,
                Some(b'*') => {
                    self.pos += 1;
                    TypeArg::Any
                }
                Some(b'+') => {
                    self.pos += 1;
                    TypeArg::Extends(self.parse_type_desc()?)
                }
                Some(b'-') => {
                    self.pos += 1;
                    TypeArg::Super(self.parse_type_desc()?)
                }
                Some(_) => TypeArg::Exact(self.parse_type_desc()?),
                None => return Err(self.error("unterminated type argument list")),
            };
            args.push(arg);
        }
        self.expect(b'>')?;
        self.leave();
        Ok(args)
    }

    /// Identifiers run until one of the grammar's reserved bytes.
    fn parse_identifier(&mut self) -> Result<&'a str> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if matches!(b, b'.' | b';' | b'[' | b'/' | b'<' | b'>' | b':') {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.error("expected identifier"));
        }
        // Terminators are ASCII, so the slice always falls on char boundaries.
        Ok(&self.source[start..self.pos])
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.eat(expected) {
            return Ok(());
        }
        let reason = match self.peek() {
            Some(found) => format!("expected `{}`, found `{}`", expected as char, found as char),
            None => format!("expected `{}`, found end of signature", expected as char),
        };
        Err(self.error(reason))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn finish(&self) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error("trailing characters after signature"))
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_SIGNATURE_DEPTH {
            return Err(self.error(format!(
                "type nesting exceeds {MAX_SIGNATURE_DEPTH} levels"
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn error(&self, reason: impl Into<String>) -> SignatureError {
        SignatureError::malformed(self.source, self.pos, reason)
    }
}

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod tests;
