//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors surfaced by a [`Command`](crate::domain::runner::Command).
///
/// Sources are preserved so the caller sees the encoder's or the asset
/// resolver's own error at the bottom of the chain.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to encode {path}")]
    Encode {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

// ── Asset errors ──────────────────────────────────────────────────────────────

/// Errors opening a bundled static asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("bundled asset not found: {0}")]
    NotFound(String),

    #[error("cannot open bundled asset {name}")]
    Open {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

// ── Payload errors ────────────────────────────────────────────────────────────

/// Errors filling a payload artifact.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("cannot read contents for {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot render template for {path}")]
    Template {
        path: String,
        #[source]
        source: std::fmt::Error,
    },
}

// ── Environment parse errors ──────────────────────────────────────────────────

/// Errors re-reading a rendered environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvParseError {
    #[error("line {line}: invalid variable name '{name}'")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: expected KEY=VALUE")]
    MissingEquals { line: usize },

    #[error("line {line}: unterminated quote")]
    UnterminatedQuote { line: usize },
}
