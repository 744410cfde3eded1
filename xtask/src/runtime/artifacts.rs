//! Artifact path management for xtask workflows.

use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::{Path, PathBuf};

const CONNECT_EXPORT_DIR: &str = ".artifacts/design-connect";

/// Central artifact path policy for xtask.
///
/// Command domains should use it instead of hard-coding ad hoc joins from the workspace root.
#[derive(Clone, Debug)]
pub struct ArtifactManager {
    root: PathBuf,
}

impl ArtifactManager {
    /// Create an artifact manager rooted at the workspace.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a workspace-relative artifact path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Resolve a possibly-relative workspace path.
    ///
    /// Absolute paths are preserved, while relative paths are anchored to the workspace root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Default location of a mapping export with the given file extension.
    pub fn connect_export(&self, extension: &str) -> PathBuf {
        self.path(CONNECT_EXPORT_DIR)
            .join(format!("mappings.{extension}"))
    }

    /// Write `body` to `path`, creating parent directories first.
    pub fn write(&self, path: &Path, body: &str) -> XtaskResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                XtaskError::io(format!("failed to create {}: {err}", parent.display()))
            })?;
        }
        fs::write(path, body).map_err(|err| {
            XtaskError::io(format!("failed to write {}: {err}", path.display())).with_path(path)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-artifacts-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn export_paths_are_root_relative() {
        let root = PathBuf::from("/tmp/xtask-artifacts-root");
        let manager = ArtifactManager::new(root.clone());
        assert_eq!(
            manager.connect_export("yaml"),
            root.join(".artifacts/design-connect/mappings.yaml")
        );
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let root = unique_temp_root();
        let manager = ArtifactManager::new(root.clone());
        let target = root.join("nested/output/mappings.json");
        manager.write(&target, "{}").expect("write export");
        assert_eq!(fs::read_to_string(&target).expect("read back"), "{}");
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn resolve_path_keeps_absolute_and_expands_relative() {
        let root = PathBuf::from("/tmp/xtask-artifacts-root");
        let manager = ArtifactManager::new(root.clone());
        assert_eq!(
            manager.resolve_path(Path::new("nested/output.json")),
            root.join("nested/output.json")
        );
        assert_eq!(
            manager.resolve_path(Path::new("/tmp/already-absolute.json")),
            PathBuf::from("/tmp/already-absolute.json")
        );
    }
}
