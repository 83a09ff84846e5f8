use serde::{Deserialize, Serialize};

/// How the build tool packages compiled artifacts for deployment.
///
/// Wire names are the lowercase variant names, which are the spellings
/// the build tool recognizes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The regular server build, which expects its dependencies to be
    /// installed next to the artifact.
    #[default]
    Standard,
    /// A self-contained bundle that carries everything it needs to run.
    Standalone,
    /// A static export with no server component.
    Export,
}

/// Deployment configuration consumed by the build tool.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct DeployConfig {
    output: OutputMode,
}

impl DeployConfig {
    /// Creates a configuration with the specified output mode.
    #[inline]
    pub fn new(output: OutputMode) -> Self {
        Self { output }
    }

    /// Returns the configured output mode.
    #[inline]
    pub fn output(&self) -> OutputMode {
        self.output
    }
}
