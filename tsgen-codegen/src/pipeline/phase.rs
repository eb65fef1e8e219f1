//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order and may add diagnostics to the context.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
