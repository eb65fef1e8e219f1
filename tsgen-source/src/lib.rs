//! Type metadata sources for the tsgen TypeScript class generator.
//!
//! Everything platform-specific about finding marked types lives here:
//!
//! - [`Config`] - optional `tsgen.toml` settings (marker, output dir, discovery)
//! - [`ModuleDirectory`] - locating the build output directory and its modules
//! - [`TypeSource`] - the interface that turns a module into [`TypeDescriptor`]s
//! - [`SidecarSource`] - reads JSON metadata written next to each module
//! - [`scan`] - runs a source over every module, skipping unreadable ones

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod discovery;
mod error;
mod sidecar;
mod source;

pub use config::{
    CONFIG_FILE, Config, DEFAULT_BIN_DIR, DEFAULT_FRAMEWORK_PREFIX, DEFAULT_MARKER,
    DEFAULT_MODULE_EXTENSION, DEFAULT_OUTPUT_DIR, DiscoveryConfig, GeneratorConfig,
};
pub use discovery::ModuleDirectory;
pub use error::{Error, Result, SourceContext};
pub use sidecar::{SIDECAR_SUFFIX, SidecarSource};
pub use source::{ModuleTypes, ScanResult, SkippedModule, TypeSource, scan};
pub use tsclassgen_ir::{FieldDescriptor, TypeDescriptor};
