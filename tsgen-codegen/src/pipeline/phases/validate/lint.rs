//! Lint trait for scanned type validation.

use tsclassgen_ir::TypeDescriptor;

use crate::pipeline::Diagnostic;

/// A check over the full set of scanned types.
///
/// Lints see every type at once, so they can report problems between types
/// such as two classes claiming one output file.
pub trait Lint: Send + Sync {
    /// Short kebab-case name, e.g. `duplicate-output`.
    fn name(&self) -> &'static str;

    /// Check the types and add any diagnostics.
    fn check(&self, types: &[TypeDescriptor], diagnostics: &mut Vec<Diagnostic>);
}
