//! Lint for output file name collisions.

use indexmap::IndexMap;
use tsclassgen_ir::TypeDescriptor;

use super::super::Lint;
use crate::{language::NamingConvention, pipeline::Diagnostic};

/// Lint that warns when two or more types would be written to the same file.
///
/// Generation still proceeds; the type scanned last overwrites the others.
/// One warning is reported per contested file, in the order the files are
/// first claimed.
pub struct DuplicateOutputLint {
    naming: NamingConvention,
}

impl DuplicateOutputLint {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Lint for DuplicateOutputLint {
    fn name(&self) -> &'static str {
        "duplicate-output"
    }

    fn check(&self, types: &[TypeDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        let mut claims: IndexMap<String, Vec<String>> = IndexMap::new();
        for ty in types {
            claims
                .entry(self.naming.file_name(&ty.name))
                .or_default()
                .push(ty.full_name());
        }

        for (file_name, mut owners) in claims {
            if owners.len() < 2 {
                continue;
            }
            let Some(winner) = owners.pop() else {
                continue;
            };
            let losers = owners
                .iter()
                .map(|o| format!("'{}'", o))
                .collect::<Vec<_>>()
                .join(", ");

            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!(
                        "{} and '{}' generate '{}'; the last one wins",
                        losers, winner, file_name
                    ),
                )
                .at(winner),
            );
        }
    }
}
