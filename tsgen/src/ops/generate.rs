//! Generate operation - model classes from discovered types.

use std::path::Path;

use eyre::{Context, Result};
use tsclassgen_codegen::{language::LanguageCodegen, pipeline::Pipeline};
use tsclassgen_codegen_typescript::{Generator, TS_NAMING};

use super::Discovery;
use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, SkippedModule, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the `.model.ts` files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Validates the discovered types, emits every class, and only then writes
/// them. The output directory is created here, so a failure anywhere earlier
/// leaves the disk untouched.
pub fn generate(discovery: Discovery, opts: GenerateOptions) -> Result<GenerateReport> {
    let Discovery { module_dir, scan } = discovery;

    let skipped = scan
        .skipped
        .iter()
        .map(|s| SkippedModule {
            module: s.module.display().to_string(),
            reason: s.reason.clone(),
        })
        .collect();
    let module_count = scan.modules.len();

    let ctx = Pipeline::new(TS_NAMING)
        .run(scan.into_types())
        .wrap_err("Validation failed")?;

    let warnings: Vec<String> = ctx.warnings().map(ToString::to_string).collect();
    for note in ctx.notes() {
        tracing::info!(phase = %note.phase, "{}", note);
    }

    let generator = Generator::from_context(ctx)?;

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate model files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: written.written,
        })
    };

    Ok(GenerateReport {
        module_dir: module_dir.path().to_path_buf(),
        module_count,
        skipped,
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tsclassgen_source::Config;

    use super::*;
    use crate::ops::discover;

    const PEOPLE: &str = r#"{
        "types": [
            {
                "name": "Person",
                "namespace": "App.Models",
                "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                "fields": [
                    { "name": "<Name>k__BackingField", "type": "System.String" },
                    { "name": "<Age>k__BackingField", "type": "System.Int32" }
                ]
            },
            {
                "name": "Order",
                "namespace": "App.Models",
                "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                "fields": [
                    {
                        "name": "<Tags>k__BackingField",
                        "type": "System.Collections.Generic.List<System.String>"
                    }
                ]
            },
            {
                "name": "PersonService",
                "namespace": "App.Services",
                "fields": [
                    { "name": "_repository", "type": "App.Data.Repository" }
                ]
            }
        ]
    }"#;

    struct Project {
        temp: TempDir,
    }

    impl Project {
        fn new() -> Self {
            Self {
                temp: TempDir::new().unwrap(),
            }
        }

        fn framework_dir(&self) -> std::path::PathBuf {
            self.temp.path().join("bin/Debug/netcoreapp3.1")
        }

        fn module(self, name: &str, sidecar: Option<&str>) -> Self {
            let dir = self.framework_dir();
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{name}.dll")), b"MZ").unwrap();
            if let Some(sidecar) = sidecar {
                fs::write(dir.join(format!("{name}.types.json")), sidecar).unwrap();
            }
            self
        }

        fn path(&self) -> &Path {
            self.temp.path()
        }

        fn output(&self) -> std::path::PathBuf {
            self.temp.path().join("ts-classes")
        }

        fn run(&self, dry_run: bool) -> Result<GenerateReport> {
            let discovery = discover(self.path(), &Config::default(), None).unwrap();
            let output_dir = self.output();
            generate(
                discovery,
                GenerateOptions {
                    output_dir: &output_dir,
                    dry_run,
                },
            )
        }
    }

    #[test]
    fn test_generate_end_to_end() {
        let project = Project::new().module("App", Some(PEOPLE));

        let report = project.run(false).unwrap();

        let person = fs::read_to_string(project.output().join("person.model.ts")).unwrap();
        assert_eq!(
            person,
            "export class Person {\n\tname: string;\n\tage: number;\n}"
        );
        let order = fs::read_to_string(project.output().join("order.model.ts")).unwrap();
        assert_eq!(order, "export class Order {\n\ttags: string[];\n}");
        assert!(!project.output().join("person-service.model.ts").exists());

        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.files.len(), 2),
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let project = Project::new().module("App", Some(PEOPLE));

        let report = project.run(true).unwrap();

        assert!(!project.output().exists());
        match report.result {
            GenerationResult::Preview(preview) => {
                let paths: Vec<&str> = preview.files.iter().map(|f| f.path.as_str()).collect();
                assert_eq!(paths, vec!["person.model.ts", "order.model.ts"]);
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_corrupt_module_is_skipped() {
        let project = Project::new()
            .module("App", Some(PEOPLE))
            .module("Broken", Some("not json"))
            .module("Native", None);

        let report = project.run(false).unwrap();

        assert_eq!(report.skipped.len(), 2);
        assert!(project.output().join("person.model.ts").is_file());
    }

    #[test]
    fn test_no_modules_creates_no_output() {
        let project = Project::new();
        fs::create_dir_all(project.framework_dir()).unwrap();

        assert!(discover(project.path(), &Config::default(), None).is_err());
        assert!(!project.output().exists());
    }

    #[test]
    fn test_malformed_type_writes_nothing() {
        let sidecar = r#"{
            "types": [
                {
                    "name": "Good",
                    "namespace": "App",
                    "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                    "fields": [{ "name": "Id", "type": "System.Guid" }]
                },
                {
                    "name": "Bad",
                    "namespace": "App",
                    "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"],
                    "fields": [{ "name": "Id", "type": "Guid" }]
                }
            ]
        }"#;
        let project = Project::new().module("App", Some(sidecar));

        assert!(project.run(false).is_err());
        assert!(!project.output().exists());
    }

    #[test]
    fn test_duplicate_output_is_reported() {
        let sidecar = r#"{
            "types": [
                { "name": "Item", "namespace": "App.One", "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"] },
                { "name": "Item", "namespace": "App.Two", "attributes": ["TypeScriptClassGenerator.GenerateTypeScript"] }
            ]
        }"#;
        let project = Project::new().module("App", Some(sidecar));

        let report = project.run(false).unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("item.model.ts"));
        assert!(report.warnings[0].ends_with("\n  --> App.Two.Item"));
        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.files, vec![project.output().join("item.model.ts")]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rerun_overwrites() {
        let project = Project::new().module("App", Some(PEOPLE));
        fs::create_dir_all(project.output()).unwrap();
        fs::write(
            project.output().join("person.model.ts"),
            "export class Person {\n\tstale: string;\n\tfields: string;\n\tremain: string;\n}",
        )
        .unwrap();

        project.run(false).unwrap();

        let person = fs::read_to_string(project.output().join("person.model.ts")).unwrap();
        assert_eq!(
            person,
            "export class Person {\n\tname: string;\n\tage: number;\n}"
        );
    }
}
