//! Generation pipeline.
//!
//! The [`Pipeline`] checks the scanned types before any file is emitted:
//!
//! - Explicit phase boundaries (currently: validate)
//! - Unified diagnostics collection
//! - A [`CompilationContext`] handed to the generator afterwards
//!
//! # Example
//!
//! ```ignore
//! use tsclassgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new(TS_NAMING).run(types)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
