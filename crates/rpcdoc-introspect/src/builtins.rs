//! Platform classes that are always resolvable, whether or not the snapshot
//! declares them.

pub const BUILTIN_CLASSES: &[&str] = &[
    "java.lang.Object",
    "java.lang.String",
    "java.lang.CharSequence",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Number",
    "java.lang.Void",
    "java.lang.Enum",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.Map",
    "java.util.HashMap",
    "java.util.Optional",
    "java.util.UUID",
    "java.util.Date",
    "java.time.Instant",
    "java.time.LocalDate",
    "java.time.LocalDateTime",
    "java.time.OffsetDateTime",
    "java.time.ZonedDateTime",
];

pub fn builtin_class(name: &str) -> Option<&'static str> {
    BUILTIN_CLASSES.iter().copied().find(|builtin| *builtin == name)
}
