//! # autoargs
//!
//! **autoargs** is a typed route-argument codec: it derives a per-field
//! wire encoding from a record's static type description, serializes the
//! record into a single printable route string suitable for deep links
//! and navigation stacks, and reconstructs the record from that string —
//! or from an environment-supplied key/value source — with round-trip
//! fidelity.
//!
//! ## Overview
//!
//! Route syntax reserves a handful of delimiter characters (`&`, `=`,
//! `?`, `{`, `}`, `/`, …), so argument values cannot be spliced into a
//! route verbatim. autoargs solves this with a reversible escaping
//! transform, a compile-time descriptor table per record type (no
//! runtime reflection), and a dual-mode failure policy: strict for
//! development, lenient for production.
//!
//! ## Architecture
//!
//! - **[`escape`]** - reversible substitution of reserved routing characters
//! - **[`descriptor`]** - static field descriptors and the [`RouteArgs`] trait
//! - **[`wire`]** - the primitive wire value union
//! - **[`codec`]** - record ⇄ route-string encoding and decoding
//! - **[`subcodec`]** - per-field codecs for primitive and nested-record fields
//! - **[`rebuild`]** - structural reassembly from per-field value maps
//! - **[`route`]** - the [`RouteDescriptor`] façade composing the above
//! - **[`source`]** - the [`KeyValueStore`] / [`AttributeBag`] input seams
//! - **[`runtime_config`]** - environment-driven failure policy
//!
//! ## Quick Start
//!
//! ```
//! use autoargs::{RouteArgs, RouteDescriptor};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, RouteArgs)]
//! struct DetailsArgs {
//!     id: i32,
//!     name: String,
//! }
//!
//! # fn main() -> Result<(), autoargs::CodecError> {
//! let destination = RouteDescriptor::<DetailsArgs>::new("details");
//!
//! // The parameterizable pattern, e.g. for registering the destination.
//! assert_eq!(destination.template(), "details?id={id}&name={name}");
//!
//! // Concrete route for a value; spaces are not reserved and pass through.
//! let args = DetailsArgs { id: 7, name: "Hello World".to_string() };
//! let route = destination.build_route(&args)?;
//! assert_eq!(route, "details?id=7&name=Hello World");
//!
//! // And back again.
//! let decoded: DetailsArgs = destination.parse_route(&route)?;
//! assert_eq!(decoded, args);
//! # Ok(())
//! # }
//! ```
//!
//! ## Nested records
//!
//! Fields whose type is not a single primitive are classified `Complex`
//! and travel as opaque escaped JSON. Register a sub-codec per complex
//! field to round-trip them:
//!
//! ```
//! use autoargs::{RouteArgs, RouteDescriptor};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Profile { nickname: String, age: i32 }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, RouteArgs)]
//! struct UserArgs {
//!     id: i32,
//!     profile: Option<Profile>,
//! }
//!
//! # fn main() -> Result<(), autoargs::CodecError> {
//! let destination =
//!     RouteDescriptor::<UserArgs>::new("user").with_sub_codec::<Profile>("profile");
//!
//! let args = UserArgs {
//!     id: 1,
//!     profile: Some(Profile { nickname: "fedja".to_string(), age: 30 }),
//! };
//! let route = destination.build_route(&args)?;
//! let decoded: UserArgs = destination.parse_route(&route)?;
//! assert_eq!(decoded, args);
//! # Ok(())
//! # }
//! ```
//!
//! Without a registered sub-codec the field is omitted from encoded
//! routes and decodes as a null hole — never a crash.

pub mod codec;
pub mod descriptor;
pub mod error;
pub mod escape;
pub mod rebuild;
pub mod route;
pub mod runtime_config;
pub mod source;
pub mod subcodec;
pub mod wire;

// Derive macro; shares the trait's name the way serde's derives do.
pub use autoargs_macros::RouteArgs;

pub use codec::ArgsCodec;
pub use descriptor::{FieldDescriptor, FieldKind, RouteArgs};
pub use error::CodecError;
pub use escape::{escape, unescape};
pub use rebuild::{rebuild, resolve_sub_codecs};
pub use route::RouteDescriptor;
pub use runtime_config::{CodecMode, RuntimeConfig};
pub use source::{AttributeBag, Attributes, KeyValueStore};
pub use subcodec::{FieldCodec, JsonCodec, PrimitiveCodec, SubCodecRegistry};
pub use wire::WireValue;
