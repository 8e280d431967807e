//! Configuration records shared by the nodekit installers.
//!
//! Every record here is plain data deserialized from a deployment file.
//! Behaviour (flag rendering, payload assembly) lives in `nodekit-cli`.

pub mod environment;
pub mod firedancer;
pub mod secret;
pub mod service;
pub mod watchtower;

pub use environment::Environment;
pub use firedancer::{Firedancer, KeyPairs};
pub use secret::Secret;
pub use service::ServiceConfig;
pub use watchtower::{Flags, NotificationConfig, Watchtower};
