//! Read-only access to bundled static assets (install scripts).
//!
//! Commands receive an `AssetSource` instead of reaching for embedded files
//! directly, so tests can hand them a fake.

use std::io::Read;

use crate::domain::error::AssetError;

/// Resolves a logical asset name to a byte stream.
#[cfg_attr(test, mockall::automock)]
pub trait AssetSource {
    /// Open `name` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] for unknown names, or
    /// [`AssetError::Open`] when the asset exists but cannot be read.
    fn open(&self, name: &str) -> Result<Box<dyn Read>, AssetError>;
}
