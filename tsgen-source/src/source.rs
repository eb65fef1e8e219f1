//! The type source interface and the module scan built on it.

use std::path::{Path, PathBuf};

use tsclassgen_ir::TypeDescriptor;

use crate::{ModuleDirectory, Result};

/// Produces the types defined in a compiled module.
///
/// Implementations hide how the metadata is obtained (sidecar files, a
/// metadata reader, a live runtime). The generator only ever sees
/// [`TypeDescriptor`]s.
pub trait TypeSource {
    /// Short name of the source, used in logs.
    fn name(&self) -> &'static str;

    /// All types defined in `module`, in definition order.
    fn types(&self, module: &Path) -> Result<Vec<TypeDescriptor>>;

    /// Types in `module` that carry the `marker` attribute, in definition order.
    fn marked_types(&self, module: &Path, marker: &str) -> Result<Vec<TypeDescriptor>> {
        Ok(self
            .types(module)?
            .into_iter()
            .filter(|ty| ty.has_attribute(marker))
            .collect())
    }
}

/// Marked types found in one module.
#[derive(Debug, Clone)]
pub struct ModuleTypes {
    pub module: PathBuf,
    pub types: Vec<TypeDescriptor>,
}

/// A module whose metadata could not be read.
#[derive(Debug, Clone)]
pub struct SkippedModule {
    pub module: PathBuf,
    pub reason: String,
}

/// Result of scanning a module directory.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Modules that were read, in scan order (including ones with no marked types).
    pub modules: Vec<ModuleTypes>,
    /// Modules that failed to load and were skipped.
    pub skipped: Vec<SkippedModule>,
}

impl ScanResult {
    /// Iterate over all marked types in scan order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.modules.iter().flat_map(|m| m.types.iter())
    }

    /// Total number of marked types.
    pub fn type_count(&self) -> usize {
        self.modules.iter().map(|m| m.types.len()).sum()
    }

    /// Consume the result, keeping only the marked types in scan order.
    pub fn into_types(self) -> Vec<TypeDescriptor> {
        self.modules.into_iter().flat_map(|m| m.types).collect()
    }
}

/// Collect the marked types of every module in `dir`.
///
/// A module that fails to load is logged and recorded in
/// [`ScanResult::skipped`]; the remaining modules are still scanned. Only a
/// failure to list the directory itself is returned as an error.
pub fn scan(dir: &ModuleDirectory, source: &dyn TypeSource, marker: &str) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for module in dir.modules()? {
        match source.marked_types(&module, marker) {
            Ok(types) => {
                tracing::debug!(
                    module = %module.display(),
                    source = source.name(),
                    count = types.len(),
                    "scanned module"
                );
                result.modules.push(ModuleTypes { module, types });
            }
            Err(e) => {
                tracing::warn!(module = %module.display(), error = %e, "skipping module");
                result.skipped.push(SkippedModule {
                    module,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(result)
}
