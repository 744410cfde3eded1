//! Shared command context passed into command families.

use crate::runtime::artifacts::ArtifactManager;
use crate::runtime::config::ConfigLoader;
use crate::runtime::error::{XtaskError, XtaskResult};
use design_connect::ConnectConfig;
use std::path::{Path, PathBuf};

const CONNECT_CONFIG: &str = "tools/design-connect.toml";

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
    artifacts: ArtifactManager,
}

impl CommandContext {
    /// Create a new command context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::at(workspace_root()?))
    }

    fn at(root: PathBuf) -> Self {
        let artifacts = ArtifactManager::new(root.clone());
        Self { root, artifacts }
    }

    /// Shared artifact manager.
    pub fn artifacts(&self) -> &ArtifactManager {
        &self.artifacts
    }

    /// Loader for the design file coordinates in `tools/design-connect.toml`.
    pub fn connect_config(&self) -> ConfigLoader<ConnectConfig> {
        ConfigLoader::new(&self.root, CONNECT_CONFIG)
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::environment("xtask lives under workspace root"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_and_artifacts_share_the_context_root() {
        let root = PathBuf::from("/workspace");
        let ctx = CommandContext::at(root.clone());

        assert_eq!(ctx.connect_config().path(), root.join(CONNECT_CONFIG));
        assert_eq!(
            ctx.artifacts().resolve_path(Path::new("out.json")),
            root.join("out.json")
        );
    }

    #[test]
    fn workspace_root_holds_the_connect_config() {
        let root = workspace_root().expect("workspace root");
        assert!(root.join("xtask").is_dir());
        assert!(CommandContext::at(root).connect_config().path().is_file());
    }
}
