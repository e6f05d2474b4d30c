//! Static field descriptors for route-argument records.
//!
//! Every record type that travels as route arguments declares an ordered
//! table pairing each field name with its primitive wire kind. The table
//! is derived from the type definition alone — no instance is needed and
//! no runtime reflection happens. `#[derive(RouteArgs)]` emits the table
//! as a `const` slice, so it exists once per type for the lifetime of the
//! process.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Primitive wire kind a field is carried as on a route string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Str,
    Int,
    Bool,
    Float,
    Long,
    /// Anything that is not a single primitive: nested records, lists,
    /// enums. Carried as an opaque escaped string and only decodable
    /// through a matching sub-codec.
    Complex,
}

impl FieldKind {
    /// Whether the kind has a built-in scalar codec.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, FieldKind::Complex)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldKind::Str => "Str",
            FieldKind::Int => "Int",
            FieldKind::Bool => "Bool",
            FieldKind::Float => "Float",
            FieldKind::Long => "Long",
            FieldKind::Complex => "Complex",
        };
        write!(f, "{}", s)
    }
}

/// Static metadata pairing a field name with its wire kind.
///
/// Ordering within a record's descriptor slice follows declaration order
/// and determines the field order in encoded routes; lookup is by name.
/// Names are unique within one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Record types that can travel as route arguments.
///
/// Usually implemented with `#[derive(RouteArgs)]`, which classifies each
/// field from its declared type (`String` → `Str`, `i32` → `Int`,
/// `bool` → `Bool`, `f32`/`f64` → `Float`, `i64` → `Long`, everything
/// else → `Complex`). A zero-field record has an empty descriptor slice.
pub trait RouteArgs: Serialize + DeserializeOwned {
    /// Field descriptors in declaration order.
    fn field_descriptors() -> &'static [FieldDescriptor];
}
