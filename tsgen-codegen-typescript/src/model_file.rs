//! Generated `<kebab>.model.ts` file.

use std::path::{Path, PathBuf};

use tsclassgen_core::GeneratedFile;

use crate::EmittedClass;

/// The model file for one emitted class.
pub struct ModelFile<'a> {
    class: &'a EmittedClass,
}

impl<'a> ModelFile<'a> {
    pub fn new(class: &'a EmittedClass) -> Self {
        Self { class }
    }
}

impl GeneratedFile for ModelFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.class.file_name)
    }

    fn render(&self) -> String {
        self.class.content.clone()
    }
}
