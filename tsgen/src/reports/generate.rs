//! Generate command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};

/// Report data from model generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory the modules were read from.
    pub module_dir: PathBuf,
    /// Number of modules read successfully.
    pub module_count: usize,
    /// Modules that could not be read.
    pub skipped: Vec<SkippedModule>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// A module left out of generation.
#[derive(Debug)]
pub struct SkippedModule {
    pub module: String,
    pub reason: String,
}

/// Result of model generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, in generation order.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for skipped in &self.skipped {
            out.warning(&format!("skipped {}: {}", skipped.module, skipped.reason));
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if written.files.is_empty() {
            out.preformatted(&format!(
                "No marked types found in {} module(s) in {}",
                self.module_count,
                self.module_dir.display()
            ));
            return;
        }

        for file in &written.files {
            out.added_item(&display_path(file));
        }
        out.newline();
        out.key_value(
            "Generated",
            &format!(
                "{} model file(s) in {}",
                written.files.len(),
                display_path(&written.output_dir)
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

/// Path for display, without a leading `./`.
fn display_path(path: &Path) -> String {
    path.strip_prefix(".").unwrap_or(path).display().to_string()
}
