//! TypeScript model class generator.

use std::path::Path;

use eyre::{Result, WrapErr};
use tsclassgen_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use tsclassgen_core::{GeneratedFile, ensure_dir};
use tsclassgen_ir::TypeDescriptor;

use crate::{EmittedClass, ModelFile, emit_class};

/// Generator that writes one `.model.ts` class per marked type.
///
/// Every class is emitted up front, so a type that cannot be translated
/// fails construction before anything touches the disk.
#[derive(Debug)]
pub struct Generator {
    classes: Vec<EmittedClass>,
}

impl LanguageCodegen for Generator {
    fn preview(&self) -> Vec<PreviewFile> {
        self.classes
            .iter()
            .map(|class| PreviewFile {
                path: class.file_name.clone(),
                content: class.content.clone(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        ensure_dir(output_dir)?;

        let mut result = GenerateResult::default();
        for class in &self.classes {
            let path = ModelFile::new(class).write(output_dir)?;
            tracing::info!(class = %class.name, path = %path.display(), "wrote model");
            // A later type with the same file name overwrites the earlier one
            if !result.written.contains(&path) {
                result.written.push(path);
            }
        }

        Ok(result)
    }
}

impl Generator {
    /// Emit a class for each type, in order.
    pub fn new(types: &[TypeDescriptor]) -> Result<Self> {
        let classes = types
            .iter()
            .map(|ty| {
                emit_class(&ty.name, &ty.fields)
                    .wrap_err_with(|| format!("failed to generate '{}'", ty.full_name()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { classes })
    }

    /// Emit classes for the types of a validated compilation context.
    pub fn from_context(ctx: CompilationContext) -> Result<Self> {
        Self::new(&ctx.types)
    }

    /// Emitted classes, in generation order.
    pub fn classes(&self) -> &[EmittedClass] {
        &self.classes
    }
}
