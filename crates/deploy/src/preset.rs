use crate::config::{DeployConfig, OutputMode};

/// Returns the deployment configuration of this project.
///
/// The artifact ships as a standalone bundle so it can be copied into a
/// container image without installing anything next to it.
#[inline]
pub fn deploy_config() -> DeployConfig {
    DeployConfig::new(OutputMode::Standalone)
}
