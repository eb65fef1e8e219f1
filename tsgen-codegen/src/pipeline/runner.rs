//! Pipeline orchestrator.

use eyre::Result;
use tsclassgen_ir::TypeDescriptor;

use super::{CompilationContext, Phase, phases::ValidatePhase};
use crate::language::NamingConvention;

/// The generation pipeline orchestrator.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in phases for the given naming convention.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            phases: vec![Box::new(ValidatePhase::new(naming))],
        }
    }

    /// Run every phase in order over the scanned types.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, types: Vec<TypeDescriptor>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(types);

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), types = ctx.types.len(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use tsclassgen_ir::FieldDescriptor;

    use super::*;

    fn identity(s: &str) -> String {
        s.to_string()
    }

    const NAMING: NamingConvention = NamingConvention {
        type_to_file: identity,
        file_suffix: ".ts",
        field_to_property: identity,
        reserved_words: &["delete"],
    };

    #[test]
    fn test_pipeline_keeps_types_and_collects_diagnostics() {
        let ctx = Pipeline::new(NAMING)
            .run(vec![
                TypeDescriptor::new(
                    "Person",
                    vec![FieldDescriptor::new("Name", "System.String")],
                ),
                TypeDescriptor::new("Marker", Vec::new()),
            ])
            .unwrap();

        assert!(!ctx.has_errors());
        let names: Vec<&str> = ctx.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Person", "Marker"]);
        assert_eq!(ctx.warnings().count(), 0);
        assert_eq!(ctx.notes().count(), 1);
    }

    #[test]
    fn test_pipeline_reports_reserved_names() {
        let ctx = Pipeline::new(NAMING)
            .run(vec![TypeDescriptor::new(
                "delete",
                vec![FieldDescriptor::new("Id", "System.Int32")],
            )])
            .unwrap();

        assert_eq!(ctx.warnings().count(), 1);
    }
}
