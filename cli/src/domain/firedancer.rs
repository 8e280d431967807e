//! Firedancer install command.
//!
//! Produces `config.toml`, the bundled `steps.sh`, and the two keypair
//! files. No environment variables: everything the script needs is in the
//! payload.

use std::io::Write;

use nodekit_common::Firedancer;
use nodekit_common::firedancer::Config;

use crate::domain::error::CommandError;
use crate::domain::runner::{AssetSource, Command, EnvBuilder, Install, Payload, PayloadFile};

/// Bundled install script.
pub const ASSET_INSTALL: &str = "firedancer/steps.sh";

pub const CONFIG_PATH: &str = "config.toml";
pub const STEPS_PATH: &str = "steps.sh";
pub const IDENTITY_PATH: &str = "validator-keypair.json";
pub const VOTE_ACCOUNT_PATH: &str = "vote-account-keypair.json";

/// Encode `config` as `fdctl` TOML into `w`.
///
/// # Errors
///
/// Returns [`CommandError::Encode`] if serialization or the write fails.
pub fn encode_config(config: &Config, w: &mut impl Write) -> Result<(), CommandError> {
    let encoded = toml::to_string(config).map_err(|e| CommandError::Encode {
        path: CONFIG_PATH.to_string(),
        source: Box::new(e),
    })?;
    w.write_all(encoded.as_bytes())
        .map_err(|e| CommandError::Encode {
            path: CONFIG_PATH.to_string(),
            source: Box::new(e),
        })
}

/// Install command for a [`Firedancer`] deployment.
pub struct FiredancerInstall<'a> {
    firedancer: &'a Firedancer,
    assets: &'a dyn AssetSource,
}

impl<'a> FiredancerInstall<'a> {
    pub fn new(firedancer: &'a Firedancer, assets: &'a dyn AssetSource) -> Self {
        Self { firedancer, assets }
    }
}

impl Install for Firedancer {
    fn install<'a>(&'a self, assets: &'a dyn AssetSource) -> Box<dyn Command + 'a> {
        Box::new(FiredancerInstall::new(self, assets))
    }
}

impl Command for FiredancerInstall<'_> {
    fn name(&self) -> &'static str {
        "firedancer"
    }

    fn check(&self) -> Result<(), CommandError> {
        Ok(())
    }

    fn env(&self) -> EnvBuilder {
        EnvBuilder::new()
    }

    fn add_to_payload(&self, payload: &mut Payload) -> Result<(), CommandError> {
        {
            let mut w = payload.new_writer(PayloadFile::new(CONFIG_PATH));
            encode_config(&self.firedancer.config, &mut w)?;
        }

        {
            let r = self.assets.open(ASSET_INSTALL)?;
            payload.add_reader(PayloadFile::executable(STEPS_PATH), r)?;
        }

        payload.add_secret(IDENTITY_PATH, &self.firedancer.key_pairs.identity);
        payload.add_secret(VOTE_ACCOUNT_PATH, &self.firedancer.key_pairs.vote_account);

        Ok(())
    }
}
