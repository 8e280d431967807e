//! Payload composition core — builders, payload and the `Command` contract.
//!
//! Pure and synchronous. Nothing here performs network or filesystem I/O;
//! bundled assets arrive through the injected [`AssetSource`].

pub mod assets;
pub mod command;
pub mod env;
pub mod flags;
pub mod payload;
pub mod template;

pub use assets::AssetSource;
pub use command::{Command, Install};
pub use env::EnvBuilder;
pub use flags::FlagBuilder;
pub use payload::{Artifact, MODE_EXEC, MODE_FILE, MODE_SECRET, Payload, PayloadFile, PayloadWriter};
pub use template::Template;
