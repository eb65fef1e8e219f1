//! Core operations.
//!
//! This module contains the business logic for tsgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod discover;
pub mod generate;
pub mod list;

pub use discover::{Discovery, discover};
pub use generate::{GenerateOptions, generate};
pub use list::list;
