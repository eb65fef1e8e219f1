//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, in generation order
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// A declared type translated into a target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Type annotation in the target language (e.g., "number[]").
    pub annotation: String,
    /// Whether the declared type is a reference (class) type.
    pub is_reference: bool,
    /// Simple name of the declared type, or of its element for lists (e.g., "Int32").
    pub element: String,
    /// Namespace of the declared type, or of its element for lists.
    pub namespace: String,
}

/// Trait for mapping declared type names to language-specific type strings.
pub trait TypeMapper {
    /// Error returned for declared type names that cannot be mapped
    type Error;

    /// Map a fully-qualified declared type name
    fn map_type(&self, declared_type: &str) -> std::result::Result<MappedType, Self::Error>;
}
