//! TypeScript AST builders for generated model files.
//!
//! These provide a small API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod class;

pub use class::{Class, ClassField};
