//! Authentication — the Opinet API key.
//!
//! ## Security Model
//!
//! - The key is injected at **build time** through the `API_KEY` variable
//!   (process environment or `.env`, see `build.rs`) and read with
//!   `option_env!`. It is never hard-coded in source.
//! - The key is sent only as the `code` form field of the POST body, never in
//!   the URL, so it does not end up in proxy or server access logs.
//! - [`Credential`] has no `Display` impl and a redacted `Debug` impl, so it
//!   cannot leak through `tracing` fields or error messages by accident.

use std::fmt;

/// Name of the build-time variable carrying the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Opinet API key. Key material is NEVER exposed via `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a key. Surrounding whitespace is trimmed; an empty key yields `None`.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The key compiled into this build, if `API_KEY` was set.
    pub fn from_build_env() -> Option<Self> {
        option_env!("API_KEY").and_then(Self::new)
    }

    /// Raw key for building the request body. Crate-internal on purpose.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
