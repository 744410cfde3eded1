//! Typed configuration loading helpers.

use crate::runtime::error::{XtaskError, XtaskResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization. Consuming command
/// domains are still responsible for semantic validation after the typed value is loaded.
///
/// ```rust
/// # use design_connect::ConnectConfig;
/// # use std::path::Path;
/// # use xtask::runtime::config::ConfigLoader;
/// let loader = ConfigLoader::<ConnectConfig>::new(Path::new("/workspace"), "tools/design-connect.toml");
/// assert!(loader.path().ends_with("tools/design-connect.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for the given workspace-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`XtaskErrorCategory::Config`](crate::runtime::error::XtaskErrorCategory::Config).
    pub fn load(&self) -> XtaskResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            XtaskError::config(format!("failed to read {}: {err}", self.path.display()))
        })?;
        toml::from_str(&body).map_err(|err| {
            XtaskError::config(format!("failed to parse {}: {err}", self.path.display()))
        })
    }

    /// Load the file when present, falling back to `T::default()` when it does not exist.
    ///
    /// Parse failures of an existing file are still errors.
    pub fn load_or_default(&self) -> XtaskResult<T>
    where
        T: Default,
    {
        if self.path.exists() {
            self.load()
        } else {
            Ok(T::default())
        }
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
