//! Core utilities and types for the tsgen TypeScript class generator.
//!
//! This crate provides the file writing primitives and string case
//! conversions shared by the other tsgen crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, ensure_dir};
// String utilities
pub use utils::{lower_first, to_kebab_case};
