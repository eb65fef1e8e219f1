//! Locating compiled modules in a project's build output.

use std::path::{Path, PathBuf};

use crate::{DiscoveryConfig, Error, Result};

/// A target framework directory holding at least one compiled module
/// (e.g., `bin/Debug/netcoreapp3.1`).
#[derive(Debug, Clone)]
pub struct ModuleDirectory {
    path: PathBuf,
    extension: String,
}

impl ModuleDirectory {
    /// Find the module directory under `project_dir`.
    ///
    /// Candidates are the subdirectories of the build output directory whose
    /// name starts with the framework prefix. They are tried newest first
    /// (descending by name) and the first one containing a module wins.
    pub fn locate(project_dir: &Path, discovery: &DiscoveryConfig) -> Result<Self> {
        let bin_dir = project_dir.join(&discovery.bin_dir);
        if !bin_dir.is_dir() {
            return Err(Box::new(Error::MissingBinDir { path: bin_dir }));
        }

        let entries = std::fs::read_dir(&bin_dir).map_err(|e| Error::io(&bin_dir, e))?;
        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&discovery.framework_prefix))
            })
            .collect();
        candidates.sort();
        candidates.reverse();

        for candidate in candidates {
            let dir = Self {
                path: candidate,
                extension: discovery.module_extension.clone(),
            };
            if !dir.modules()?.is_empty() {
                tracing::debug!(path = %dir.path.display(), "found module directory");
                return Ok(dir);
            }
            tracing::debug!(path = %dir.path.display(), "skipping directory without modules");
        }

        Err(Box::new(Error::NoFrameworkDir {
            path: bin_dir,
            prefix: discovery.framework_prefix.clone(),
        }))
    }

    /// Use `path` directly as the module directory.
    ///
    /// Fails if it holds no modules with the configured extension.
    pub fn at(path: impl Into<PathBuf>, extension: impl Into<String>) -> Result<Self> {
        let dir = Self {
            path: path.into(),
            extension: extension.into(),
        };
        if dir.modules()?.is_empty() {
            return Err(Box::new(Error::NoModules {
                path: dir.path,
                extension: dir.extension,
            }));
        }
        Ok(dir)
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List module files, sorted by file name.
    pub fn modules(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut modules: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && self.is_module(path))
            .collect();
        modules.sort();
        Ok(modules)
    }

    fn is_module(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}
