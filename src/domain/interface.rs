// Interface model extracted from TypeScript source.
// These types carry exactly what guard generation needs, nothing else.

use std::fmt;

use serde::Serialize;

/// The primitive keyword types recognized in property annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Undefined,
    Null,
    Void,
    Any,
    Unknown,
    Never,
    Object,
}

impl PrimitiveKind {
    /// The TypeScript keyword spelling of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Void => "void",
            PrimitiveKind::Any => "any",
            PrimitiveKind::Unknown => "unknown",
            PrimitiveKind::Never => "never",
            PrimitiveKind::Object => "object",
        }
    }

    /// The tag `typeof` reports for values of this kind, when one exists.
    /// `null` has no tag of its own, and the marker kinds (`void`, `any`,
    /// `unknown`, `never`, `object`) carry no single discriminating tag.
    pub fn typeof_tag(&self) -> Option<&'static str> {
        match self {
            PrimitiveKind::String => Some("string"),
            PrimitiveKind::Number => Some("number"),
            PrimitiveKind::Boolean => Some("boolean"),
            PrimitiveKind::BigInt => Some("bigint"),
            PrimitiveKind::Symbol => Some("symbol"),
            PrimitiveKind::Undefined => Some("undefined"),
            PrimitiveKind::Null
            | PrimitiveKind::Void
            | PrimitiveKind::Any
            | PrimitiveKind::Unknown
            | PrimitiveKind::Never
            | PrimitiveKind::Object => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One named, optionally typed member of an interface body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
    /// Declared name of the property.
    pub name: String,
    /// Primitive kind, when the declaration carried a bare keyword
    /// annotation. `None` means unchecked at runtime beyond presence.
    pub kind: Option<PrimitiveKind>,
}

/// An interface declaration reduced to the parts guard generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDefinition {
    /// Declared name of the interface, casing preserved.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDefinition>,
}
