//! Bundled install scripts.
//!
//! At compile time, `include_dir!` embeds everything under `cli/assets/`:
//!   - `firedancer/steps.sh` — installs `fdctl` and starts the validator

use std::io::{self, Read};
use std::path::PathBuf;

use include_dir::{Dir, include_dir};

use crate::domain::{AssetError, AssetSource};

static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn open(&self, name: &str) -> Result<Box<dyn Read>, AssetError> {
        let file = EMBEDDED_ASSETS
            .get_file(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        Ok(Box::new(file.contents()))
    }
}

/// Assets read from a directory on disk, laid out like the embedded set.
///
/// Lets operators swap in a patched install script without rebuilding.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn open(&self, name: &str) -> Result<Box<dyn Read>, AssetError> {
        let path = self.root.join(name);
        match std::fs::File::open(&path) {
            Ok(f) => {
                tracing::debug!(asset = name, path = %path.display(), "asset override");
                Ok(Box::new(f))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(name.to_string()))
            }
            Err(source) => Err(AssetError::Open {
                name: name.to_string(),
                source,
            }),
        }
    }
}
