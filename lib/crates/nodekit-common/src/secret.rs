// lib/crates/nodekit-common/src/secret.rs

use std::fmt;

use serde::Deserialize;

/// A secret-classified string (keypair material).
///
/// `Secret` deliberately has no `Display`, `Deref`, `AsRef<str>` or
/// `Serialize` implementation: the only way to reach the inner value is
/// [`Secret::expose`]. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a raw secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw secret value.
    ///
    /// Callers must only use the result as file content, never as a flag,
    /// environment variable, or log field.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the secret holds no material at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}
