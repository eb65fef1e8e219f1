//! Lint for types without fields.

use tsclassgen_ir::TypeDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes marked types with no fields (they generate an empty class).
pub struct EmptyClassLint;

impl Lint for EmptyClassLint {
    fn name(&self) -> &'static str {
        "empty-class"
    }

    fn check(&self, types: &[TypeDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        for ty in types.iter().filter(|ty| ty.fields.is_empty()) {
            diagnostics.push(
                Diagnostic::info("validate", format!("'{}' has no fields", ty.name))
                    .at(ty.full_name()),
            );
        }
    }
}
