//! Infrastructure implementation of the `DeploymentSource` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nodekit_common::ServiceConfig;

use crate::application::ports::DeploymentSource;

/// Used when neither `--config` nor `NODEKIT_CONFIG` is set.
pub const DEFAULT_CONFIG: &str = "nodekit.yaml";

/// Resolve the deployment file. clap fills `flag` from `NODEKIT_CONFIG` when
/// `--config` is absent.
#[must_use]
pub fn resolve_path(flag: Option<&Path>) -> PathBuf {
    flag.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), Path::to_path_buf)
}

/// Deployment read from a YAML file on disk.
pub struct YamlDeploymentSource {
    path: PathBuf,
}

impl YamlDeploymentSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DeploymentSource for YamlDeploymentSource {
    fn load(&self) -> Result<ServiceConfig> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        let service: ServiceConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), service = service.name(), "deployment loaded");
        Ok(service)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
