use serde::Deserialize;

use crate::firedancer::Firedancer;
use crate::watchtower::Watchtower;

/// One installable service, selected by the `service` tag of a deployment
/// file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "service", rename_all = "lowercase")]
pub enum ServiceConfig {
    Firedancer(Firedancer),
    Watchtower(Watchtower),
}

impl ServiceConfig {
    /// Service name as written in the `service` tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Firedancer(_) => "firedancer",
            Self::Watchtower(_) => "watchtower",
        }
    }
}
