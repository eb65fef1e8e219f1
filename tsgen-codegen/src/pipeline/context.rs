//! Compilation context passed through pipeline phases.

use tsclassgen_ir::TypeDescriptor;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// Marked types in scan order.
    pub types: Vec<TypeDescriptor>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from scanned types.
    pub fn new(types: Vec<TypeDescriptor>) -> Self {
        Self {
            types,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.with_severity(Severity::Error).count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Warnings, in the order they were recorded.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    /// Informational notes, in the order they were recorded.
    pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Info)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}
