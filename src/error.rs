//! Error types for codec operations.

use crate::descriptor::FieldKind;
use thiserror::Error;

/// Error type for encode, decode, and rebuild operations.
///
/// Whether an error surfaces to the caller or degrades to a per-field
/// default depends on the active [`CodecMode`](crate::runtime_config::CodecMode):
/// `Strict` fails fast, `Lenient` logs and substitutes zero values or
/// null holes. A failure in one field never corrupts its siblings.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A field's value could not be rendered to its structural wire form.
    #[error("encoding failed for field `{field}`: {message}")]
    Encoding { field: String, message: String },

    /// A stored string could not be parsed back into the declared kind.
    #[error("decoding failed for field `{field}` as {kind}: {message}")]
    Decoding {
        field: String,
        kind: FieldKind,
        message: String,
    },

    /// Structural reassembly of the record failed, e.g. a required
    /// non-nullable field was still missing after rebuild.
    #[error("record assembly failed: {0}")]
    Assembly(#[source] serde_json::Error),

    /// No codec could be resolved for a field carrying data.
    #[error("no sub-codec resolvable for field `{field}`")]
    UnsupportedField { field: String },

    /// A route string did not match the descriptor's base name.
    #[error("route `{route}` does not match base `{base}`")]
    BaseMismatch { route: String, base: String },
}
