//! Primitive wire values.
//!
//! [`WireValue`] is the intermediate form between a record's native field
//! and its string representation: decode paths parse raw strings into it,
//! encode paths render it, and structural assembly converts it into the
//! composite `serde_json::Value` representation. Instances are transient
//! per call.

use crate::descriptor::FieldKind;
use crate::error::CodecError;
use serde_json::Value;

/// Tagged union over the primitive kinds a field can carry on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    Str(String),
    Null,
}

impl WireValue {
    /// Zero value substituted when a source has no entry for a field:
    /// `false`, `0`, `0`, `0.0`, `""`. `Complex` fields default to the
    /// empty string, matching their opaque-string carriage.
    #[must_use]
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Bool => WireValue::Bool(false),
            FieldKind::Int => WireValue::Int(0),
            FieldKind::Long => WireValue::Long(0),
            FieldKind::Float => WireValue::Float(0.0),
            FieldKind::Str | FieldKind::Complex => WireValue::Str(String::new()),
        }
    }

    /// String form used on the wire: booleans as `true`/`false`, integers
    /// as base-10 digits, floats in default decimal notation.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            WireValue::Bool(b) => b.to_string(),
            WireValue::Int(i) => i.to_string(),
            WireValue::Long(l) => l.to_string(),
            WireValue::Float(f) => f.to_string(),
            WireValue::Str(s) => s.clone(),
            WireValue::Null => "null".to_string(),
        }
    }

    /// Parse a raw wire string back into the declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decoding`] when `raw` does not parse as
    /// `kind` (e.g. a non-numeric string declared `Int`). `Str` and
    /// `Complex` never fail — the raw string is taken as-is.
    pub fn parse(field: &str, kind: FieldKind, raw: &str) -> Result<Self, CodecError> {
        let decode_err = |message: String| CodecError::Decoding {
            field: field.to_string(),
            kind,
            message,
        };
        Ok(match kind {
            FieldKind::Bool => WireValue::Bool(
                raw.parse()
                    .map_err(|e: std::str::ParseBoolError| decode_err(e.to_string()))?,
            ),
            FieldKind::Int => WireValue::Int(
                raw.parse()
                    .map_err(|e: std::num::ParseIntError| decode_err(e.to_string()))?,
            ),
            FieldKind::Long => WireValue::Long(
                raw.parse()
                    .map_err(|e: std::num::ParseIntError| decode_err(e.to_string()))?,
            ),
            FieldKind::Float => WireValue::Float(
                raw.parse()
                    .map_err(|e: std::num::ParseFloatError| decode_err(e.to_string()))?,
            ),
            FieldKind::Str | FieldKind::Complex => WireValue::Str(raw.to_string()),
        })
    }
}

impl From<WireValue> for Value {
    fn from(v: WireValue) -> Value {
        match v {
            WireValue::Bool(b) => Value::from(b),
            WireValue::Int(i) => Value::from(i),
            WireValue::Long(l) => Value::from(l),
            WireValue::Float(f) => Value::from(f),
            WireValue::Str(s) => Value::from(s),
            WireValue::Null => Value::Null,
        }
    }
}
