use crate::descriptor::{FieldKind, RouteArgs};
use crate::error::CodecError;
use crate::escape::{escape, unescape};
use crate::runtime_config::CodecMode;
use crate::source::{AttributeBag, KeyValueStore};
use crate::subcodec::SubCodecRegistry;
use crate::wire::WireValue;
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::warn;

/// Maximum number of fields before the transient pair list spills to the
/// heap. Destinations rarely carry more than a handful of arguments.
pub const MAX_INLINE_FIELDS: usize = 8;

/// Stack-allocated pair storage for one encode call.
type PairVec = SmallVec<[(&'static str, String); MAX_INLINE_FIELDS]>;

/// Encoder/decoder for one record type.
///
/// Stateless apart from the failure policy; construct one per
/// [`RouteDescriptor`](crate::route::RouteDescriptor) and reuse it for
/// every call.
#[derive(Debug, Clone, Copy)]
pub struct ArgsCodec<T: RouteArgs> {
    mode: CodecMode,
    _marker: PhantomData<fn() -> T>,
}

impl<T: RouteArgs> Default for ArgsCodec<T> {
    fn default() -> Self {
        Self::new(CodecMode::default())
    }
}

impl<T: RouteArgs> ArgsCodec<T> {
    #[must_use]
    pub fn new(mode: CodecMode) -> Self {
        Self {
            mode,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CodecMode {
        self.mode
    }

    /// Encode a record into a route string.
    ///
    /// Fields appear in descriptor order as `name=value` pairs joined by
    /// `&`, prefixed with `"{base_name}?"`. Scalar fields render their
    /// wire string form; `Complex` fields render through their registered
    /// sub-codec as escaped JSON, and are omitted entirely when no
    /// sub-codec is resolvable.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encoding`] when the record cannot be
    /// structurally encoded, or (strict mode only) when a sub-codec
    /// rejects a complex field's value. In lenient mode the failing field
    /// is rendered empty and logged.
    pub fn encode(
        &self,
        value: &T,
        base_name: &str,
        sub_codecs: &SubCodecRegistry,
    ) -> Result<String, CodecError> {
        let fields = T::field_descriptors();
        let encoded = serde_json::to_value(value).map_err(|e| CodecError::Encoding {
            field: base_name.to_string(),
            message: e.to_string(),
        })?;
        let map = match encoded {
            Value::Object(map) => map,
            // Zero-field records structurally encode as null.
            Value::Null if fields.is_empty() => Map::new(),
            other => {
                return Err(CodecError::Encoding {
                    field: base_name.to_string(),
                    message: format!("expected a record, got {}", kind_of(&other)),
                });
            }
        };

        let mut pairs: PairVec = SmallVec::new();
        for field in fields {
            let Some(v) = map.get(field.name) else {
                continue;
            };
            let rendered = if field.kind.is_primitive() {
                render_scalar(v)
            } else if v.is_null() {
                // Absent optional nested record: leave a hole instead of
                // shipping a literal null the sub-codec cannot take back.
                continue;
            } else {
                match sub_codecs.get(field.name) {
                    Some(codec) => match codec.encode(field.name, v) {
                        Ok(wire) => wire,
                        Err(err) => match self.mode {
                            CodecMode::Strict => return Err(err),
                            CodecMode::Lenient => {
                                warn!(field = field.name, error = %err, "complex field failed to encode; rendering empty");
                                String::new()
                            }
                        },
                    },
                    None => {
                        warn!(
                            field = field.name,
                            "no sub-codec registered; omitting field from route"
                        );
                        continue;
                    }
                }
            };
            pairs.push((field.name, rendered));
        }

        let query = pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        Ok(format!("{base_name}?{query}"))
    }

    /// Decode a record from a full route string.
    ///
    /// Pairs with names outside the descriptor table are ignored; missing
    /// primitive fields take their kind's zero default; `Complex` fields
    /// decode through their sub-codec when one is resolvable and are left
    /// as null holes otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BaseMismatch`] when `route` does not start
    /// with `base_name`, [`CodecError::Decoding`] (strict mode) for
    /// malformed field values, and [`CodecError::Assembly`] when the
    /// reassembled record is structurally invalid.
    pub fn decode_route(
        &self,
        route: &str,
        base_name: &str,
        sub_codecs: &SubCodecRegistry,
    ) -> Result<T, CodecError> {
        let query = match route.split_once('?') {
            Some((base, query)) if base == base_name => query,
            None if route == base_name => "",
            _ => {
                return Err(CodecError::BaseMismatch {
                    route: route.to_string(),
                    base: base_name.to_string(),
                });
            }
        };

        // Last write wins on duplicate names.
        let mut raw: HashMap<&str, &str> = HashMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            raw.insert(name, value);
        }

        let mut map = Map::new();
        for field in T::field_descriptors() {
            let value = match raw.get(field.name) {
                Some(stored) if field.kind.is_primitive() => {
                    match WireValue::parse(field.name, field.kind, &unescape(stored)) {
                        Ok(parsed) => parsed.into(),
                        Err(err) => match self.mode {
                            CodecMode::Strict => return Err(err),
                            CodecMode::Lenient => {
                                warn!(field = field.name, error = %err, "malformed field value; substituting default");
                                WireValue::default_for(field.kind).into()
                            }
                        },
                    }
                }
                Some(stored) => match sub_codecs.get(field.name) {
                    Some(codec) => match codec.decode(field.name, stored) {
                        Ok(decoded) => decoded,
                        Err(err) => match self.mode {
                            CodecMode::Strict => return Err(err),
                            CodecMode::Lenient => {
                                warn!(field = field.name, error = %err, "complex field failed to decode; leaving null hole");
                                Value::Null
                            }
                        },
                    },
                    None => Value::Null,
                },
                None if field.kind.is_primitive() => WireValue::default_for(field.kind).into(),
                None => Value::Null,
            };
            map.insert(field.name.to_string(), value);
        }
        serde_json::from_value(Value::Object(map)).map_err(CodecError::Assembly)
    }

    /// Decode a record from a typed key/value store.
    ///
    /// For each field the store's value is taken as-is (the store applies
    /// its own primitive coercion); absent entries take the kind's zero
    /// default. This is the flat path — `Complex` fields come back as the
    /// opaque strings they were stored as; use
    /// [`RouteDescriptor::bind_complex`](crate::route::RouteDescriptor::bind_complex)
    /// to run them through sub-codecs.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Assembly`] when the assembled values do not
    /// fit the record's structure.
    pub fn decode_from_store<S: KeyValueStore>(&self, store: &S) -> Result<T, CodecError> {
        let mut map = Map::new();
        for field in T::field_descriptors() {
            let wire = store
                .get(field.name)
                .unwrap_or_else(|| WireValue::default_for(field.kind));
            map.insert(field.name.to_string(), wire.into());
        }
        serde_json::from_value(Value::Object(map)).map_err(CodecError::Assembly)
    }

    /// Decode a record from a nullable attribute bag.
    ///
    /// Mirrors [`decode_from_store`](Self::decode_from_store) with typed
    /// getters; a `None` bag behaves as if every lookup returned absent,
    /// yielding the all-defaults record.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Assembly`] when the assembled values do not
    /// fit the record's structure.
    pub fn decode_from_bag(&self, bag: Option<&dyn AttributeBag>) -> Result<T, CodecError> {
        let mut map = Map::new();
        for field in T::field_descriptors() {
            let value: Value = match (bag, field.kind) {
                (Some(bag), FieldKind::Bool) => Value::from(bag.get_bool(field.name, false)),
                (Some(bag), FieldKind::Int) => Value::from(bag.get_int(field.name, 0)),
                (Some(bag), FieldKind::Long) => Value::from(bag.get_long(field.name, 0)),
                (Some(bag), FieldKind::Float) => Value::from(bag.get_float(field.name, 0.0)),
                (Some(bag), FieldKind::Str | FieldKind::Complex) => {
                    Value::from(bag.get_string(field.name, ""))
                }
                (None, kind) => WireValue::default_for(kind).into(),
            };
            map.insert(field.name.to_string(), value);
        }
        serde_json::from_value(Value::Object(map)).map_err(CodecError::Assembly)
    }
}

/// Wire string form of a scalar JSON value, escaped for route transport.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => escape(s),
        other => escape(&other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
