//! TypeScript model class generator for tsgen.
//!
//! Turns marked types into TypeScript class declarations, one file per type.
//!
//! # Usage
//!
//! This crate is used internally by the `tsgen` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use tsclassgen_codegen::{language::LanguageCodegen, pipeline::Pipeline};
//! use tsclassgen_codegen_typescript::{Generator, TS_NAMING};
//!
//! let ctx = Pipeline::new(TS_NAMING).run(types)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Write files to disk
//! let result = generator.generate(Path::new("ts-classes"))?;
//! ```
//!
//! # Generated Output
//!
//! A type `OrderLine` with a `<Quantity>k__BackingField` field of type
//! `System.Int32` produces `order-line.model.ts`:
//!
//! ```text
//! export class OrderLine {
//! 	quantity: number;
//! }
//! ```

mod emitter;
mod error;
mod generator;
mod model_file;
mod naming;
mod type_mapper;

pub mod ast;

pub use ast::{Class, ClassField};
pub use emitter::{EmittedClass, emit_class};
pub use error::Error;
pub use generator::Generator;
pub use model_file::ModelFile;
pub use naming::{TS_NAMING, extract_field_name, property_name};
pub use tsclassgen_codegen::language::{GenerateResult, LanguageCodegen, MappedType, PreviewFile};
pub use type_mapper::{TypeScriptTypeMapper, lookup};
