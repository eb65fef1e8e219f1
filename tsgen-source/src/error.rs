use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tsgen-source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the text of a file being parsed so parse errors can point into it.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "tsgen.toml");
/// let config: Config = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a metadata parse error from a serde_json error.
    pub fn metadata_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.offset_of(source.line(), source.column()).map(|offset| {
            SourceSpan::from(offset..offset)
        });
        Box::new(Error::MetadataParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Byte offset of a 1-based line and column, if it lies within the source.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = line_start + column.saturating_sub(1);
        (offset <= self.src.len()).then_some(offset)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(tsgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tsgen.toml")]
    #[diagnostic(code(tsgen::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("build output directory '{path}' does not exist")]
    #[diagnostic(
        code(tsgen::missing_bin_dir),
        help("run tsgen from a project directory after building the project")
    )]
    MissingBinDir { path: PathBuf },

    #[error("no '{prefix}*' directory with modules found in '{path}'")]
    #[diagnostic(
        code(tsgen::no_framework_dir),
        help("build the project, or set [discovery] framework_prefix in tsgen.toml")
    )]
    NoFrameworkDir { path: PathBuf, prefix: String },

    #[error("no '*.{extension}' modules found in '{path}'")]
    #[diagnostic(code(tsgen::no_modules))]
    NoModules { path: PathBuf, extension: String },

    #[error("no type metadata for module '{module}'")]
    #[diagnostic(
        code(tsgen::missing_metadata),
        help("expected '{sidecar}' next to the module")
    )]
    MissingMetadata { module: PathBuf, sidecar: String },

    #[error("failed to parse type metadata")]
    #[diagnostic(code(tsgen::metadata_parse))]
    MetadataParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
