//! Lint for type names that are reserved words in the target language.

use tsclassgen_ir::TypeDescriptor;

use super::super::Lint;
use crate::{language::NamingConvention, pipeline::Diagnostic};

/// Lint that warns about class names the target language reserves.
pub struct ReservedNameLint {
    naming: NamingConvention,
}

impl ReservedNameLint {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Lint for ReservedNameLint {
    fn name(&self) -> &'static str {
        "reserved-name"
    }

    fn check(&self, types: &[TypeDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        for ty in types {
            if self.naming.is_reserved(&ty.name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("'{}' is a reserved word and is not a valid class name", ty.name),
                    )
                    .at(ty.full_name()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(s: &str) -> String {
        s.to_string()
    }

    const NAMING: NamingConvention = NamingConvention {
        type_to_file: identity,
        file_suffix: ".ts",
        field_to_property: identity,
        reserved_words: &["delete", "class"],
    };

    #[test]
    fn test_reserved_name() {
        let types = vec![
            TypeDescriptor::new("delete", Vec::new()),
            TypeDescriptor::new("Delete", Vec::new()),
        ];

        let mut diagnostics = Vec::new();
        ReservedNameLint::new(NAMING).check(&types, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("delete"));
    }
}
