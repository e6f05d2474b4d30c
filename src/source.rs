//! External argument sources.
//!
//! Decoded field values can arrive from two environment-supplied
//! containers: a typed key/value store (one entry per field name, the
//! store performs its own primitive coercion) or a nullable attribute bag
//! with per-kind getters. The codec only depends on these traits; the
//! map-backed [`Attributes`] implementation ships for tests and for
//! embedding the codec without a host framework.

use crate::wire::WireValue;
use std::collections::HashMap;

/// Typed key/value source holding at most one entry per field name.
pub trait KeyValueStore {
    /// Look up the stored value for `name`, if any.
    fn get(&self, name: &str) -> Option<WireValue>;
}

impl KeyValueStore for HashMap<String, WireValue> {
    fn get(&self, name: &str) -> Option<WireValue> {
        HashMap::get(self, name).cloned()
    }
}

/// Nullable bundle with typed getters, each taking an explicit default.
pub trait AttributeBag {
    fn get_bool(&self, name: &str, default: bool) -> bool;
    fn get_int(&self, name: &str, default: i32) -> i32;
    fn get_long(&self, name: &str, default: i64) -> i64;
    fn get_float(&self, name: &str, default: f64) -> f64;
    fn get_string(&self, name: &str, default: &str) -> String;
}

/// Map-backed [`AttributeBag`].
#[derive(Debug, Default, Clone)]
pub struct Attributes {
    entries: HashMap<String, WireValue>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: WireValue) {
        self.entries.insert(name.into(), value);
    }
}

impl AttributeBag for Attributes {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.entries.get(name) {
            Some(WireValue::Bool(b)) => *b,
            _ => default,
        }
    }

    fn get_int(&self, name: &str, default: i32) -> i32 {
        match self.entries.get(name) {
            Some(WireValue::Int(i)) => *i,
            _ => default,
        }
    }

    fn get_long(&self, name: &str, default: i64) -> i64 {
        match self.entries.get(name) {
            Some(WireValue::Long(l)) => *l,
            _ => default,
        }
    }

    fn get_float(&self, name: &str, default: f64) -> f64 {
        match self.entries.get(name) {
            Some(WireValue::Float(f)) => *f,
            _ => default,
        }
    }

    fn get_string(&self, name: &str, default: &str) -> String {
        match self.entries.get(name) {
            Some(WireValue::Str(s)) => s.clone(),
            _ => default.to_string(),
        }
    }
}
