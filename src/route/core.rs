use crate::codec::ArgsCodec;
use crate::descriptor::{FieldKind, RouteArgs};
use crate::error::CodecError;
use crate::rebuild::{rebuild, resolve_sub_codecs};
use crate::runtime_config::{CodecMode, RuntimeConfig};
use crate::source::{AttributeBag, KeyValueStore};
use crate::subcodec::{FieldCodec, SubCodecRegistry};
use crate::wire::WireValue;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Named, parameterized route for one record type.
///
/// Composes the descriptor table, the value codec, and the record
/// rebuilder behind a small surface:
///
/// - [`template`](Self::template) — the route pattern with `{name}`
///   placeholders, computed once and cached
/// - [`build_route`](Self::build_route) — record → route string
/// - [`parse_route`](Self::parse_route), [`bind`](Self::bind),
///   [`bind_bag`](Self::bind_bag) — route string / store / bag → record
/// - [`bind_complex`](Self::bind_complex) — store → record, decoding
///   nested fields through their sub-codecs
pub struct RouteDescriptor<T: RouteArgs> {
    base_name: String,
    codec: ArgsCodec<T>,
    sub_codecs: SubCodecRegistry,
    template: OnceCell<String>,
}

impl<T: RouteArgs> RouteDescriptor<T> {
    /// Create a descriptor for `base_name` with the failure policy from
    /// [`RuntimeConfig::from_env`].
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            codec: ArgsCodec::new(RuntimeConfig::from_env().mode),
            sub_codecs: SubCodecRegistry::new(),
            template: OnceCell::new(),
        }
    }

    /// Override the failure policy.
    #[must_use]
    pub fn with_mode(mut self, mode: CodecMode) -> Self {
        self.codec = ArgsCodec::new(mode);
        self
    }

    /// Register a derived JSON sub-codec for a `Complex` field.
    #[must_use]
    pub fn with_sub_codec<U>(mut self, field: &str) -> Self
    where
        U: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        self.sub_codecs.register::<U>(field);
        self
    }

    /// Register an arbitrary codec implementation for a field.
    #[must_use]
    pub fn with_field_codec(mut self, field: &str, codec: Arc<dyn FieldCodec>) -> Self {
        self.sub_codecs.register_codec(field, codec);
        self
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    #[must_use]
    pub fn mode(&self) -> CodecMode {
        self.codec.mode()
    }

    /// The parameterizable route pattern:
    /// `"{base}?f1={f1}&f2={f2}&…"`.
    ///
    /// Computed on first access and cached; concurrent first access is
    /// safe, the computation is deterministic and runs at most once per
    /// descriptor.
    pub fn template(&self) -> &str {
        self.template.get_or_init(|| {
            let placeholders = T::field_descriptors()
                .iter()
                .map(|f| format!("{}={{{}}}", f.name, f.name))
                .collect::<Vec<_>>()
                .join("&");
            debug!(base = %self.base_name, "computed route template");
            format!("{}?{}", self.base_name, placeholders)
        })
    }

    /// Build a concrete route string from a record value.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError::Encoding`] per the active mode; see
    /// [`ArgsCodec::encode`].
    pub fn build_route(&self, args: &T) -> Result<String, CodecError> {
        self.codec.encode(args, &self.base_name, &self.sub_codecs)
    }

    /// Decode a record from a route string previously produced by
    /// [`build_route`](Self::build_route) (extra unknown parameters are
    /// ignored).
    ///
    /// # Errors
    ///
    /// See [`ArgsCodec::decode_route`].
    pub fn parse_route(&self, route: &str) -> Result<T, CodecError> {
        self.codec
            .decode_route(route, &self.base_name, &self.sub_codecs)
    }

    /// Decode a record from a typed key/value store (flat path).
    ///
    /// # Errors
    ///
    /// See [`ArgsCodec::decode_from_store`].
    pub fn bind<S: KeyValueStore>(&self, store: &S) -> Result<T, CodecError> {
        self.codec.decode_from_store(store)
    }

    /// Decode a record from a nullable attribute bag (flat path).
    ///
    /// # Errors
    ///
    /// See [`ArgsCodec::decode_from_bag`].
    pub fn bind_bag(&self, bag: Option<&dyn AttributeBag>) -> Result<T, CodecError> {
        self.codec.decode_from_bag(bag)
    }

    /// Decode a record whose fields may include nested records.
    ///
    /// Every field is pulled from the store and run through its resolved
    /// sub-codec; fields with no stored value, a blank complex value, or
    /// no resolvable codec become null holes for the rebuilder to fill.
    ///
    /// # Errors
    ///
    /// In strict mode, a stored complex value with no registered codec is
    /// [`CodecError::UnsupportedField`] and sub-codec failures surface
    /// directly; in lenient mode both degrade to null holes. Either way a
    /// missing required field ends in [`CodecError::Assembly`].
    pub fn bind_complex<S: KeyValueStore>(&self, store: &S) -> Result<T, CodecError> {
        let codecs = resolve_sub_codecs(T::field_descriptors(), &self.sub_codecs);
        let mut values: HashMap<String, Value> = HashMap::new();

        for field in T::field_descriptors() {
            let Some(stored) = store.get(field.name) else {
                continue;
            };
            let Some(codec) = codecs.get(field.name) else {
                // Data present but nothing can decode it.
                if self.mode() == CodecMode::Strict {
                    return Err(CodecError::UnsupportedField {
                        field: field.name.to_string(),
                    });
                }
                continue;
            };
            match stored {
                WireValue::Str(raw) => {
                    if field.kind == FieldKind::Complex && raw.trim().is_empty() {
                        continue;
                    }
                    match codec.decode(field.name, &raw) {
                        Ok(decoded) => {
                            values.insert(field.name.to_string(), decoded);
                        }
                        Err(err) => match self.mode() {
                            CodecMode::Strict => return Err(err),
                            CodecMode::Lenient => {
                                warn!(field = field.name, error = %err, "sub-codec decode failed; leaving null hole");
                            }
                        },
                    }
                }
                // Already a typed scalar; no decoding left to do.
                other => {
                    values.insert(field.name.to_string(), other.into());
                }
            }
        }
        rebuild(&values)
    }
}
