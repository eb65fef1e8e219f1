//! JSON metadata sidecar reader.
//!
//! A build step (or any tool able to read the module) writes the module's
//! type metadata next to it as `<stem>.types.json`:
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "Person",
//!       "namespace": "App.Models",
//!       "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
//!       "fields": [
//!         { "name": "<Name>k__BackingField", "type": "System.String" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tsclassgen_ir::TypeDescriptor;

use crate::{Error, Result, SourceContext, TypeSource};

/// Suffix replacing the module extension to form the sidecar file name.
pub const SIDECAR_SUFFIX: &str = "types.json";

#[derive(Debug, Deserialize)]
struct SidecarFile {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

/// [`TypeSource`] backed by `<stem>.types.json` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarSource;

impl SidecarSource {
    pub fn new() -> Self {
        Self
    }

    /// Sidecar path for a module (`App.dll` -> `App.types.json`).
    pub fn sidecar_path(module: &Path) -> PathBuf {
        module.with_extension(SIDECAR_SUFFIX)
    }

    /// Parse sidecar content with a filename for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Vec<TypeDescriptor>> {
        let ctx = SourceContext::new(content, filename);
        let file: SidecarFile =
            serde_json::from_str(content).map_err(|e| ctx.metadata_error(e))?;
        Ok(file.types)
    }
}

impl TypeSource for SidecarSource {
    fn name(&self) -> &'static str {
        "sidecar"
    }

    fn types(&self, module: &Path) -> Result<Vec<TypeDescriptor>> {
        let sidecar = Self::sidecar_path(module);
        if !sidecar.is_file() {
            return Err(Box::new(Error::MissingMetadata {
                module: module.to_path_buf(),
                sidecar: sidecar.display().to_string(),
            }));
        }

        let content = std::fs::read_to_string(&sidecar).map_err(|e| Error::io(&sidecar, e))?;
        Self::parse(&content, &sidecar.display().to_string())
    }
}
