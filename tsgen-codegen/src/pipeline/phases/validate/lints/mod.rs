//! Built-in lints.

mod duplicate_output;
mod empty_class;
mod reserved_name;

pub use duplicate_output::DuplicateOutputLint;
pub use empty_class::EmptyClassLint;
pub use reserved_name::ReservedNameLint;
