//! Validate phase - runs lints on the scanned types.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateOutputLint, EmptyClassLint, ReservedNameLint};

use crate::{
    language::NamingConvention,
    pipeline::{CompilationContext, Phase},
};

/// Phase that validates the scanned types using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the default lints.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateOutputLint::new(naming)),
                Box::new(ReservedNameLint::new(naming)),
                Box::new(EmptyClassLint),
            ],
        }
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.types, &mut ctx.diagnostics);
            tracing::debug!(
                lint = lint.name(),
                found = ctx.diagnostics.len() - before,
                "lint checked"
            );
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
