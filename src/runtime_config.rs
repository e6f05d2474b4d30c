//! Runtime configuration.
//!
//! Loads codec behavior from environment variables.
//!
//! ## `AUTOARGS_MODE`
//!
//! Selects the failure policy:
//! - `strict` — every encode/decode failure surfaces to the caller
//! - `lenient` — per-field failures degrade to zero defaults or null
//!   holes and are logged
//!
//! When unset (or unrecognized), debug builds run strict and release
//! builds run lenient, so development fails fast while production
//! prefers resilience. Test suites should exercise both modes
//! explicitly via [`crate::route::RouteDescriptor::with_mode`].

use std::env;

/// Failure policy for codec operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecMode {
    /// Fail fast: all encoding/decoding errors surface immediately.
    Strict,
    /// Degrade per field: parse failures become zero defaults, complex
    /// decode failures become null holes, all logged.
    Lenient,
}

impl Default for CodecMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            CodecMode::Strict
        } else {
            CodecMode::Lenient
        }
    }
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Failure policy (default: strict in debug builds, lenient otherwise)
    pub mode: CodecMode,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mode = match env::var("AUTOARGS_MODE") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "strict" => CodecMode::Strict,
                "lenient" => CodecMode::Lenient,
                _ => CodecMode::default(),
            },
            Err(_) => CodecMode::default(),
        };
        RuntimeConfig { mode }
    }
}
