//! Dispatch from a deployment's [`ServiceConfig`] to its install command.

use nodekit_common::ServiceConfig;

use crate::domain::runner::{AssetSource, Command, Install};
use crate::domain::watchtower::WatchtowerInstall;

impl Install for ServiceConfig {
    fn install<'a>(&'a self, assets: &'a dyn AssetSource) -> Box<dyn Command + 'a> {
        match self {
            ServiceConfig::Firedancer(fd) => fd.install(assets),
            ServiceConfig::Watchtower(wt) => wt.install(assets),
        }
    }
}

/// CLI flags the service passes to its remote binary, when it has any.
#[must_use]
pub fn service_args(service: &ServiceConfig) -> Option<Vec<String>> {
    match service {
        ServiceConfig::Firedancer(_) => None,
        ServiceConfig::Watchtower(wt) => Some(WatchtowerInstall::new(wt).args()),
    }
}
