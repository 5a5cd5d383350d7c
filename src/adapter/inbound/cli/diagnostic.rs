//! Miette-based diagnostics for configuration errors.
//!
//! A malformed config file is reported with the offending snippet and a
//! label under the bad span instead of a bare parser message.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(rollcall::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: miette::NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a new diagnostic pointing at `offset..offset + len` in `src`.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: miette::NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse failure.
    ///
    /// Returns `None` when the parser did not report a location.
    #[must_use]
    pub fn from_toml(name: &str, src: &str, error: &toml::de::Error) -> Option<Self> {
        let span = error.span()?;
        let len = span.end.saturating_sub(span.start).max(1);
        Some(
            Self::new(error.message(), name, src, span.start, len)
                .with_help("run `rollcall config init --force` to regenerate a valid template"),
        )
    }
}

/// Render `diagnostic` to stderr with miette's graphical handler.
pub fn report(diagnostic: ConfigDiagnostic) {
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
