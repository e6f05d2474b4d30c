//! Per-field sub-codecs.
//!
//! Two codec families exist, one per wire shape: [`PrimitiveCodec`]
//! handles the scalar kinds directly, while [`JsonCodec`] carries a
//! nested record as an escaped JSON string. Both are reachable through
//! the object-safe [`FieldCodec`] trait so the record rebuilder can
//! compose them without branching on field kind.
//!
//! Sub-codecs for `Complex` fields are supplied by the caller through a
//! [`SubCodecRegistry`]; there is no runtime reflection.

use crate::descriptor::FieldKind;
use crate::error::CodecError;
use crate::escape::{escape, unescape};
use crate::wire::WireValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Codec responsible for a single field's value.
pub trait FieldCodec: Send + Sync {
    /// Decode the raw wire string into the field's JSON form.
    fn decode(&self, field: &str, raw: &str) -> Result<Value, CodecError>;

    /// Render the field's JSON form into its wire string.
    fn encode(&self, field: &str, value: &Value) -> Result<String, CodecError>;
}

/// Built-in codec for the primitive wire kinds.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveCodec {
    kind: FieldKind,
}

impl PrimitiveCodec {
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self { kind }
    }
}

impl FieldCodec for PrimitiveCodec {
    fn decode(&self, field: &str, raw: &str) -> Result<Value, CodecError> {
        let parsed = WireValue::parse(field, self.kind, &unescape(raw))?;
        Ok(parsed.into())
    }

    fn encode(&self, field: &str, value: &Value) -> Result<String, CodecError> {
        let rendered = match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => {
                return Err(CodecError::Encoding {
                    field: field.to_string(),
                    message: format!("expected a {} scalar, got a structured value", self.kind),
                });
            }
        };
        Ok(escape(&rendered))
    }
}

/// Structured sub-codec carrying one nested record as escaped JSON.
///
/// Decoding parses through `T` rather than into a free-form JSON value,
/// so unknown keys are dropped and the field's schema is enforced before
/// the value reaches the rebuilder.
pub struct JsonCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldCodec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn decode(&self, field: &str, raw: &str) -> Result<Value, CodecError> {
        let json = unescape(raw);
        let typed: T = serde_json::from_str(&json).map_err(|e| CodecError::Decoding {
            field: field.to_string(),
            kind: FieldKind::Complex,
            message: e.to_string(),
        })?;
        serde_json::to_value(typed).map_err(|e| CodecError::Decoding {
            field: field.to_string(),
            kind: FieldKind::Complex,
            message: e.to_string(),
        })
    }

    fn encode(&self, field: &str, value: &Value) -> Result<String, CodecError> {
        let encode_err = |message: String| CodecError::Encoding {
            field: field.to_string(),
            message,
        };
        // Round-trip through T so only values matching the field's type
        // make it onto the wire.
        let typed: T =
            serde_json::from_value(value.clone()).map_err(|e| encode_err(e.to_string()))?;
        let json = serde_json::to_string(&typed).map_err(|e| encode_err(e.to_string()))?;
        Ok(escape(&json))
    }
}

/// Registry of caller-supplied sub-codecs for `Complex` fields.
///
/// Callers register a codec per complex field name at descriptor
/// construction time; lookup is by field name only.
#[derive(Default, Clone)]
pub struct SubCodecRegistry {
    codecs: HashMap<String, Arc<dyn FieldCodec>>,
}

impl SubCodecRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a derived JSON sub-codec for `field`.
    pub fn register<T>(&mut self, field: &str)
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        self.codecs
            .insert(field.to_string(), Arc::new(JsonCodec::<T>::new()));
    }

    /// Register an arbitrary codec implementation for `field`.
    pub fn register_codec(&mut self, field: &str, codec: Arc<dyn FieldCodec>) {
        self.codecs.insert(field.to_string(), codec);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<Arc<dyn FieldCodec>> {
        self.codecs.get(field).cloned()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.codecs.contains_key(field)
    }
}
