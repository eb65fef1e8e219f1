//! `tsgen.toml` configuration.
//!
//! The file is optional. Every key has a default, so a project without a
//! config file behaves exactly like one with an empty file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Name of the optional configuration file in the project directory.
pub const CONFIG_FILE: &str = "tsgen.toml";

/// Fully-qualified name of the attribute that opts a type into generation.
pub const DEFAULT_MARKER: &str = "TypeScriptClassGenerator.GenerateTypeScript";

/// Output directory for generated classes, relative to the project directory.
pub const DEFAULT_OUTPUT_DIR: &str = "ts-classes";

/// Build output directory, relative to the project directory.
pub const DEFAULT_BIN_DIR: &str = "bin/Debug";

/// Prefix of the target framework directory inside the build output directory.
pub const DEFAULT_FRAMEWORK_PREFIX: &str = "netcoreapp";

/// File extension of compiled modules.
pub const DEFAULT_MODULE_EXTENSION: &str = "dll";

/// Root of `tsgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub discovery: DiscoveryConfig,
}

/// `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Marker attribute name.
    pub marker: String,
    /// Output directory for `.model.ts` files.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// `[discovery]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Build output directory.
    pub bin_dir: PathBuf,
    /// Target framework directory prefix (e.g., "netcoreapp").
    pub framework_prefix: String,
    /// Module file extension, without the dot.
    pub module_extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            bin_dir: PathBuf::from(DEFAULT_BIN_DIR),
            framework_prefix: DEFAULT_FRAMEWORK_PREFIX.to_string(),
            module_extension: DEFAULT_MODULE_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load `tsgen.toml` from the project directory, or the defaults if there is none.
    pub fn load_or_default(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::open(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config content with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| ctx.config_error(e))
    }
}

impl std::str::FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}
