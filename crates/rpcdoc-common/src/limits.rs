//! Centralized limits for signature parsing and type resolution.
//!
//! Compiler-emitted signatures are shallow in practice, but a snapshot can be
//! hand-written or corrupted. These bounds keep the recursive parser and the
//! tree builder from overflowing the stack on hostile input.

/// Maximum nesting depth of a single type descriptor.
///
/// Every array marker, type-argument list and wildcard bound counts as one
/// level. `Ljava/util/Map<Ljava/lang/String;Ljava/util/List<[I>;>;` is four
/// levels deep. Exceeding this depth is reported as a malformed signature.
pub const MAX_SIGNATURE_DEPTH: u32 = 64;

/// Maximum length, in bytes, of a raw signature accepted by the parser.
///
/// The JVM class-file format stores signatures as `CONSTANT_Utf8` entries,
/// which are limited to 65535 bytes.
pub const MAX_SIGNATURE_LEN: usize = 65_535;

/// Snapshot format versions understood by the introspector.
pub const SUPPORTED_SNAPSHOT_VERSIONS: &[u32] = &[1];
