//! List command report data structures.

use std::path::PathBuf;

use super::{
    SkippedModule,
    output::{Output, Report},
};

/// Report data from listing marked types.
#[derive(Debug)]
pub struct ListReport {
    /// Directory the modules were read from.
    pub module_dir: PathBuf,
    /// Marker attribute types were selected by.
    pub marker: String,
    /// Modules read successfully, in scan order.
    pub modules: Vec<ModuleEntry>,
    /// Modules that could not be read.
    pub skipped: Vec<SkippedModule>,
}

/// A module and its marked types.
#[derive(Debug)]
pub struct ModuleEntry {
    pub name: String,
    pub types: Vec<TypeEntry>,
}

/// A marked type and the file it would produce.
#[derive(Debug)]
pub struct TypeEntry {
    pub full_name: String,
    /// Output file name; empty when the type cannot be translated.
    pub file_name: String,
    pub field_count: usize,
    /// Other generated classes the type refers to.
    pub imports: Vec<String>,
    /// Why the type cannot be translated, if it cannot.
    pub error: Option<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for skipped in &self.skipped {
            out.warning(&format!("skipped {}: {}", skipped.module, skipped.reason));
        }

        out.key_value("Modules", &self.module_dir.display().to_string());
        out.key_value("Marker", &self.marker);

        for module in &self.modules {
            out.newline();
            if module.types.is_empty() {
                out.key_value(&module.name, "no marked types");
                continue;
            }

            out.section(&module.name);
            for ty in &module.types {
                match &ty.error {
                    Some(error) => out.list_item(&format!("{} (error: {})", ty.full_name, error)),
                    None => {
                        out.list_item(&format!(
                            "{} -> {} ({} field{})",
                            ty.full_name,
                            ty.file_name,
                            ty.field_count,
                            if ty.field_count == 1 { "" } else { "s" }
                        ));
                        if !ty.imports.is_empty() {
                            out.key_value_indented("uses", &ty.imports.join(", "));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            module_dir: PathBuf::from("bin/Debug/netcoreapp3.1"),
            marker: "Acme.Generate".to_string(),
            modules: vec![
                ModuleEntry {
                    name: "App.dll".to_string(),
                    types: vec![
                        TypeEntry {
                            full_name: "App.Models.Order".to_string(),
                            file_name: "order.model.ts".to_string(),
                            field_count: 2,
                            imports: vec!["Customer".to_string()],
                            error: None,
                        },
                        TypeEntry {
                            full_name: "App.Models.Broken".to_string(),
                            file_name: String::new(),
                            field_count: 1,
                            imports: Vec::new(),
                            error: Some("bad field".to_string()),
                        },
                    ],
                },
                ModuleEntry {
                    name: "Util.dll".to_string(),
                    types: Vec::new(),
                },
            ],
            skipped: Vec::new(),
        };
        let mut out = RecordingOutput::default();

        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Modules: bin/Debug/netcoreapp3.1",
                "Marker: Acme.Generate",
                "",
                "App.dll:",
                "  - App.Models.Order -> order.model.ts (2 fields)",
                "    uses: Customer",
                "  - App.Models.Broken (error: bad field)",
                "",
                "Util.dll: no marked types",
            ]
        );
    }
}
