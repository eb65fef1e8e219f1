//! Shared code generation utilities for the tsgen TypeScript class generator.
//!
//! This crate provides the language-agnostic pieces used by the TypeScript
//! generator (`tsclassgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention, etc.)
//! - [`pipeline`] - Validation of scanned types before generation

pub mod builder;
pub mod language;
pub mod pipeline;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
