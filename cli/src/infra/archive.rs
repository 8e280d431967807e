//! Infrastructure implementation of the `BundleWriter` port.
//!
//! The archive is a gzip'd tar with one regular-file entry per artifact, in
//! payload order, owned by root with mtime 0, so equal payloads produce
//! byte-identical archives. Both outputs are written to a temp file beside
//! the destination and renamed into place; they keep the temp file's `0600`
//! mode since they carry key material.

use std::io::Write;
use std::path::{Component, Path};

use anyhow::{Context, Result, bail};
use flate2::{Compression, GzBuilder};
use tempfile::NamedTempFile;

use crate::application::ports::BundleWriter;
use crate::domain::{EnvBuilder, Payload};

/// Writes bundles to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzBundleWriter;

fn temp_beside(dest: &Path) -> Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir).with_context(|| format!("cannot create temp file in {}", dir.display()))
}

fn persist(tmp: NamedTempFile, dest: &Path) -> Result<()> {
    tmp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("cannot write {}", dest.display()))?;
    Ok(())
}

/// Artifact paths must stay inside the extraction directory.
fn check_entry_path(path: &str) -> Result<()> {
    let p = Path::new(path);
    if path.is_empty() || p.is_absolute() {
        bail!("artifact path '{path}' must be relative");
    }
    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("artifact path '{path}' escapes the payload root");
    }
    Ok(())
}

impl BundleWriter for TarGzBundleWriter {
    fn write_archive(&self, payload: &Payload, dest: &Path) -> Result<()> {
        for artifact in payload.iter() {
            check_entry_path(artifact.path())?;
        }

        let tmp = temp_beside(dest)?;
        let gz = GzBuilder::new().mtime(0).write(tmp, Compression::default());
        let mut tar = tar::Builder::new(gz);
        tar.mode(tar::HeaderMode::Deterministic);

        for artifact in payload.iter() {
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(artifact.contents().len() as u64);
            header.set_mode(artifact.mode());
            header.set_mtime(0);
            header.set_uid(0);
            header.set_gid(0);
            tar.append_data(&mut header, artifact.path(), artifact.contents())
                .with_context(|| format!("cannot archive {}", artifact.path()))?;
        }

        let gz = tar.into_inner().context("cannot finish tar stream")?;
        let tmp = gz.finish().context("cannot finish gzip stream")?;
        persist(tmp, dest)
    }

    fn write_env(&self, env: &EnvBuilder, dest: &Path) -> Result<()> {
        let mut tmp = temp_beside(dest)?;
        tmp.write_all(env.to_string().as_bytes())
            .with_context(|| format!("cannot write {}", dest.display()))?;
        persist(tmp, dest)
    }
}
