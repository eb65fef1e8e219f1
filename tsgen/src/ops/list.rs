//! List operation - what would be generated, per module.

use tsclassgen_codegen_typescript::emit_class;

use super::Discovery;
use crate::reports::{ListReport, ModuleEntry, SkippedModule, TypeEntry};

/// Execute the list operation.
///
/// Types that cannot be translated are listed with their error instead of
/// aborting, so one bad field does not hide the rest of the listing.
pub fn list(discovery: &Discovery, marker: &str) -> ListReport {
    let modules = discovery
        .scan
        .modules
        .iter()
        .map(|module| ModuleEntry {
            name: module
                .module
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| module.module.display().to_string()),
            types: module
                .types
                .iter()
                .map(|ty| match emit_class(&ty.name, &ty.fields) {
                    Ok(class) => TypeEntry {
                        full_name: ty.full_name(),
                        file_name: class.file_name,
                        field_count: ty.fields.len(),
                        imports: class.imports,
                        error: None,
                    },
                    Err(e) => TypeEntry {
                        full_name: ty.full_name(),
                        file_name: String::new(),
                        field_count: ty.fields.len(),
                        imports: Vec::new(),
                        error: Some(e.to_string()),
                    },
                })
                .collect(),
        })
        .collect();

    let skipped = discovery
        .scan
        .skipped
        .iter()
        .map(|s| SkippedModule {
            module: s.module.display().to_string(),
            reason: s.reason.clone(),
        })
        .collect();

    ListReport {
        module_dir: discovery.module_dir.path().to_path_buf(),
        marker: marker.to_string(),
        modules,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tsclassgen_source::{Config, DEFAULT_MARKER};

    use super::*;
    use crate::ops::discover;

    #[test]
    fn test_list_types_per_module() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Shop.dll"), b"").unwrap();
        fs::write(
            temp.path().join("Shop.types.json"),
            r#"{
                "types": [
                    {
                        "name": "OrderLine",
                        "namespace": "Shop.Models",
                        "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                        "fields": [
                            { "name": "<Product>k__BackingField", "type": "Shop.Models.Product" },
                            { "name": "<Note>k__BackingField", "type": "Text" }
                        ]
                    },
                    {
                        "name": "Product",
                        "namespace": "Shop.Models",
                        "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                        "fields": [
                            { "name": "<Variants>k__BackingField", "type": "Shop.Models.Product[]" },
                            { "name": "<Supplier>k__BackingField", "type": "Shop.Models.Supplier" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        fs::write(temp.path().join("Empty.dll"), b"").unwrap();

        let discovery = discover(temp.path(), &Config::default(), Some(temp.path())).unwrap();
        let report = list(&discovery, DEFAULT_MARKER);

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.modules[0].name, "Shop.dll");

        let types = &report.modules[0].types;
        assert_eq!(types[0].full_name, "Shop.Models.OrderLine");
        assert!(types[0].error.is_some());
        assert_eq!(types[1].file_name, "product.model.ts");
        assert_eq!(types[1].imports, vec!["Supplier".to_string()]);
    }
}
