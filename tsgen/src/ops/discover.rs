//! Discover operation - find the module directory and scan it for marked types.

use std::path::Path;

use tsclassgen_source::{Config, ModuleDirectory, Result, ScanResult, SidecarSource, scan};

/// Modules found for a project and the marked types they contain.
#[derive(Debug)]
pub struct Discovery {
    pub module_dir: ModuleDirectory,
    pub scan: ScanResult,
}

/// Locate the module directory and collect marked types from every module.
///
/// `modules_dir` bypasses the build output search. Nothing is written.
pub fn discover(
    project_dir: &Path,
    config: &Config,
    modules_dir: Option<&Path>,
) -> Result<Discovery> {
    let module_dir = match modules_dir {
        Some(dir) => ModuleDirectory::at(dir, config.discovery.module_extension.as_str())?,
        None => ModuleDirectory::locate(project_dir, &config.discovery)?,
    };
    tracing::info!(path = %module_dir.path().display(), "scanning modules");

    let scan = scan(&module_dir, &SidecarSource::new(), &config.generator.marker)?;

    Ok(Discovery { module_dir, scan })
}
