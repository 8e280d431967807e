//! The `Command` contract every installable service implements.

use crate::domain::error::CommandError;
use crate::domain::runner::assets::AssetSource;
use crate::domain::runner::env::EnvBuilder;
use crate::domain::runner::payload::Payload;

/// One unit of remote work derived from a service configuration.
///
/// Callers run the three steps in order: [`check`](Command::check), then
/// [`env`](Command::env), then [`add_to_payload`](Command::add_to_payload).
/// The trait itself does not enforce that order.
pub trait Command {
    /// Short service name used in progress and log output.
    fn name(&self) -> &'static str;

    /// Validate the wrapped configuration. Pure: no mutation, no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Invalid`] describing the inconsistency.
    fn check(&self) -> Result<(), CommandError>;

    /// Environment the remote script runs with. Same input, same output.
    fn env(&self) -> EnvBuilder;

    /// Write this command's artifacts into `payload`.
    ///
    /// # Errors
    ///
    /// Propagates encoder, asset and payload errors unchanged. After an
    /// error the payload must be discarded.
    fn add_to_payload(&self, payload: &mut Payload) -> Result<(), CommandError>;
}

/// Entry point from a service configuration to its install [`Command`].
pub trait Install {
    /// Build the install command. `assets` resolves bundled scripts for
    /// services that ship one.
    fn install<'a>(&'a self, assets: &'a dyn AssetSource) -> Box<dyn Command + 'a>;
}
