//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: embedded and on-disk
//! assets, deployment file loading, and bundle writing.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod archive;
pub mod assets;
pub mod config;
