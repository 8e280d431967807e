//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod firedancer;
pub mod runner;
pub mod service;
pub mod watchtower;

pub use error::{AssetError, CommandError, EnvParseError, PayloadError};
pub use runner::{
    AssetSource, Command, EnvBuilder, FlagBuilder, Install, Payload, PayloadFile, Template,
};
pub use service::service_args;
