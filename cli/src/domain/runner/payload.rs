//! `Payload` — the ordered set of files a remote install runs against.
//!
//! Artifacts are keyed by relative path. Adding a path that already exists
//! replaces its content and mode but keeps its position. Content is opaque
//! bytes; the payload never interprets what it stores.

use std::fmt;
use std::io::{self, Read, Write};

use indexmap::IndexMap;
use nodekit_common::Secret;
use sha2::{Digest, Sha256};

use crate::domain::error::PayloadError;
use crate::domain::runner::template::Template;

/// Regular files.
pub const MODE_FILE: u32 = 0o644;
/// Scripts the remote runner executes.
pub const MODE_EXEC: u32 = 0o755;
/// Key material.
pub const MODE_SECRET: u32 = 0o600;

/// Where an artifact lands inside the payload, and with which Unix mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadFile {
    pub path: String,
    pub mode: u32,
}

impl PayloadFile {
    /// A regular file (`0644`).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: MODE_FILE,
        }
    }

    /// An executable script (`0755`).
    pub fn executable(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: MODE_EXEC,
        }
    }

    /// Key material (`0600`).
    pub fn secret(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: MODE_SECRET,
        }
    }
}

impl From<&str> for PayloadFile {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// One stored file.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    file: PayloadFile,
    contents: Vec<u8>,
}

impl Artifact {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.file.path
    }

    #[must_use]
    pub fn mode(&self) -> u32 {
        self.file.mode
    }

    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

// Contents may be key material: show only the size.
impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("path", &self.file.path)
            .field("mode", &format_args!("{:o}", self.file.mode))
            .field("len", &self.contents.len())
            .finish()
    }
}

/// Ordered bundle of artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    artifacts: IndexMap<String, Artifact>,
}

/// Sink returned by [`Payload::new_writer`]. Everything written becomes the
/// artifact's content.
pub struct PayloadWriter<'a> {
    buf: &'a mut Vec<u8>,
}

impl Write for PayloadWriter<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, file: PayloadFile) -> &mut Vec<u8> {
        let artifact = Artifact {
            file: file.clone(),
            contents: Vec::new(),
        };
        let (index, _) = self.artifacts.insert_full(file.path, artifact);
        &mut self.artifacts[index].contents
    }

    /// Create (or truncate) `file` and return a sink for its content.
    pub fn new_writer(&mut self, file: PayloadFile) -> PayloadWriter<'_> {
        PayloadWriter {
            buf: self.slot(file),
        }
    }

    /// Copy `reader` to completion into `file`.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Read`] if the reader fails.
    pub fn add_reader(
        &mut self,
        file: impl Into<PayloadFile>,
        mut reader: impl Read,
    ) -> Result<(), PayloadError> {
        let file = file.into();
        let mut contents = Vec::new();
        reader
            .read_to_end(&mut contents)
            .map_err(|source| PayloadError::Read {
                path: file.path.clone(),
                source,
            })?;
        *self.slot(file) = contents;
        Ok(())
    }

    /// Store `content` verbatim.
    pub fn add_string(&mut self, file: impl Into<PayloadFile>, content: &str) {
        *self.slot(file.into()) = content.as_bytes().to_vec();
    }

    /// Store key material under `path` with mode `0600`.
    pub fn add_secret(&mut self, path: &str, secret: &Secret) {
        self.add_string(PayloadFile::secret(path), secret.expose());
    }

    /// Render `template` against `data` and store the result.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Template`] if rendering fails.
    pub fn add_template<D: ?Sized>(
        &mut self,
        file: impl Into<PayloadFile>,
        template: &impl Template<D>,
        data: &D,
    ) -> Result<(), PayloadError> {
        let file = file.into();
        let mut rendered = String::new();
        template
            .render(data, &mut rendered)
            .map_err(|source| PayloadError::Template {
                path: file.path.clone(),
                source,
            })?;
        *self.slot(file) = rendered.into_bytes();
        Ok(())
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Artifacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Hex SHA-256 over every artifact's path, mode and content, in order.
    ///
    /// Two payloads with the same digest hold byte-identical artifact sets.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for artifact in self.iter() {
            hasher.update(artifact.path().as_bytes());
            hasher.update([0u8]);
            hasher.update(artifact.mode().to_be_bytes());
            hasher.update((artifact.contents.len() as u64).to_be_bytes());
            hasher.update(&artifact.contents);
        }
        format!("{:x}", hasher.finalize())
    }
}
