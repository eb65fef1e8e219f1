//! TypeScript class builder.

use tsclassgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property declaration in a TypeScript class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassField {
    pub name: String,
    pub ty: String,
}

impl ClassField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for exported TypeScript classes with property declarations only.
///
/// The rendered class has no trailing newline after its closing brace.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    fields: Vec<ClassField>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a property.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(ClassField::new(name, ty));
        self
    }

    /// Add a prepared property.
    pub fn field_with(mut self, field: ClassField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[ClassField] {
        &self.fields
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(format!("{}: {};", field.name, field.ty)))
            .collect();

        vec![
            CodeFragment::block(format!("export class {} {{", self.name), body, None),
            CodeFragment::raw("}"),
        ]
    }
}
