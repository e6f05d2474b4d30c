//! # Route Descriptor Module
//!
//! A [`RouteDescriptor`] names one destination and ties a record type to
//! it: it renders the parameterizable route template, builds concrete
//! routes from record values, and binds raw field values from any
//! supported input source back into the record.
//!
//! The descriptor is a stateless façade over the escaping transform, the
//! value codec, and the record rebuilder. Its single piece of derived
//! state — the rendered template — is computed on first access and
//! cached for the descriptor's lifetime; descriptors are intended to
//! live in statics, one per destination, as route tables usually do.

mod core;

pub use core::RouteDescriptor;
