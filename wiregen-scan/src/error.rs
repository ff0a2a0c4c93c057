use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for scan operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while scanning a Go package tree.
///
/// Every variant is fatal: the scan either completes or aborts with no
/// partial results.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(wiregen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(wiregen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to load the Go grammar")]
    #[diagnostic(code(wiregen::grammar_error))]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("prefix must not be empty")]
    #[diagnostic(
        code(wiregen::empty_prefix),
        help("pass the provider naming convention, e.g. --prefix Provide")
    )]
    EmptyPrefix,

    #[error("prefix '{prefix}' is not exported")]
    #[diagnostic(
        code(wiregen::unexported_prefix),
        help("wire providers are exported functions; the prefix must start with an upper-case letter, e.g. Provide")
    )]
    UnexportedPrefix { prefix: String },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub(crate) fn parse(
        path: &Path,
        source: &str,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Self::Parse {
            src: NamedSource::new(path.display().to_string(), source.to_string()),
            span,
            message: message.into(),
        })
    }

    pub(crate) fn grammar(source: tree_sitter::LanguageError) -> Box<Self> {
        Box::new(Self::Grammar { source })
    }
}
