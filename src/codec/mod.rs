//! # Value Codec Module
//!
//! The codec module turns typed records into route query strings and
//! back. Encoding walks the record's descriptor table, renders each
//! field through the escaping transform, and joins the pairs into
//! `"{base}?f1=v1&f2=v2"`. Decoding reverses the walk from any of three
//! inputs: a full route string, a typed key/value store, or a nullable
//! attribute bag — all sharing one defaulting policy for missing fields.
//!
//! All operations are pure and reentrant; every intermediate value is
//! created per call and discarded when the call returns.

mod core;

pub use core::*;
