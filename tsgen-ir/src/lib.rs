//! Intermediate representation types for the tsgen TypeScript class generator.
//!
//! These records are what every type source produces and what the emitter
//! consumes:
//!
//! ```text
//! module metadata → tsgen-source (type source) → tsgen-ir (descriptors) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Independent of how the types were discovered
//! - Transient (built per scan, never persisted)
//! - Self-contained (no dependencies beyond serde)

mod types;

pub use types::{FieldDescriptor, TypeDescriptor};
