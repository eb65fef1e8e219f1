//! Translation of one marked type into a TypeScript class.

use tsclassgen_codegen::language::{MappedType, TypeMapper};
use tsclassgen_ir::FieldDescriptor;

use crate::{
    Error, TS_NAMING, TypeScriptTypeMapper,
    ast::{Class, ClassField},
    lookup,
};

/// A rendered TypeScript class, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedClass {
    /// Class name (the type's simple name).
    pub name: String,
    /// Output file name, e.g. `order-line.model.ts`.
    pub file_name: String,
    /// Full file content.
    pub content: String,
    /// Other generated classes this one refers to, in first-use order.
    ///
    /// Import statements are not written; this is informational.
    pub imports: Vec<String>,
}

/// Render the class for a type named `name` with `fields` in declaration order.
///
/// Fails if any field's declared type cannot be mapped.
pub fn emit_class(name: &str, fields: &[FieldDescriptor]) -> Result<EmittedClass, Error> {
    let mut class = Class::new(name);
    let mut imports: Vec<String> = Vec::new();

    for field in fields {
        let property = TS_NAMING.property_name(&field.raw_name);
        let mapped = TypeScriptTypeMapper
            .map_type(&field.declared_type)
            .map_err(|source| Error::Field {
                class: name.to_string(),
                field: property.clone(),
                source: Box::new(source),
            })?;

        if let Some(import) = import_candidate(&mapped, name) {
            if !imports.iter().any(|i| i == import) {
                imports.push(import.to_string());
            }
        }

        class = class.field_with(ClassField::new(property, mapped.annotation));
    }

    Ok(EmittedClass {
        name: name.to_string(),
        file_name: TS_NAMING.file_name(name),
        content: class.build(),
        imports,
    })
}

/// Name of another generated class that `mapped` refers to.
///
/// Only reference types whose name is emitted untranslated qualify. Types in
/// `System` and its sub-namespaces never do.
fn import_candidate<'a>(mapped: &'a MappedType, class: &str) -> Option<&'a str> {
    let system = mapped.namespace == "System" || mapped.namespace.starts_with("System.");
    let untranslated = lookup(&mapped.element).is_none();

    (mapped.is_reference && untranslated && !system && mapped.element != class)
        .then_some(mapped.element.as_str())
}
