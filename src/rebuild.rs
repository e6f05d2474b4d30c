//! Record rebuilder.
//!
//! Reassembles a full record from a per-field value map whose entries
//! were decoded elsewhere — scalars directly, nested records through
//! their sub-codecs. Purely structural: nothing here parses wire
//! strings; the map values are wrapped into the canonical composite
//! representation and handed to the structural decoder for `T`.

use crate::descriptor::{FieldDescriptor, RouteArgs};
use crate::error::CodecError;
use crate::subcodec::{FieldCodec, PrimitiveCodec, SubCodecRegistry};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Reassemble a record from already-decoded field values.
///
/// Fields missing from `field_values` (and explicit `Value::Null`
/// entries) become null holes; a partial map is fine as long as every
/// hole lands on an optional field.
///
/// # Errors
///
/// Returns [`CodecError::Assembly`] when a required non-nullable field
/// is left missing or a value does not fit its declared field type.
pub fn rebuild<T: RouteArgs>(field_values: &HashMap<String, Value>) -> Result<T, CodecError> {
    let mut map = Map::new();
    for field in T::field_descriptors() {
        let value = field_values.get(field.name).cloned().unwrap_or(Value::Null);
        map.insert(field.name.to_string(), value);
    }
    serde_json::from_value(Value::Object(map)).map_err(CodecError::Assembly)
}

/// Resolve one sub-codec per field.
///
/// Primitive kinds map to built-in [`PrimitiveCodec`]s; `Complex` fields
/// map to registry entries. A field with no resolvable codec is skipped
/// and logged — the returned map only contains resolvable fields, so
/// downstream decoding leaves a null hole for the rest.
#[must_use]
pub fn resolve_sub_codecs(
    fields: &'static [FieldDescriptor],
    registry: &SubCodecRegistry,
) -> HashMap<&'static str, Arc<dyn FieldCodec>> {
    let mut resolved: HashMap<&'static str, Arc<dyn FieldCodec>> = HashMap::new();
    for field in fields {
        if field.kind.is_primitive() {
            resolved.insert(field.name, Arc::new(PrimitiveCodec::new(field.kind)));
        } else if let Some(codec) = registry.get(field.name) {
            resolved.insert(field.name, codec);
        } else {
            warn!(
                field = field.name,
                "no sub-codec resolvable; field will be skipped"
            );
        }
    }
    resolved
}
