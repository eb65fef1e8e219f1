//! Built-in pipeline phases.

pub mod validate;

pub use validate::ValidatePhase;
