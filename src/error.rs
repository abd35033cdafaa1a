// src/error.rs
use sheetwright_content::ContentError;
use sheetwright_pdf_composer::ComposerError;
use sheetwright_traits::{ExecutorError, PdfError, TypesetError};
use std::path::PathBuf;
use thiserror::Error;

/// A character file could not be turned into a valid definition.
///
/// Recoverable per file: the batch driver reports it and only re-raises it
/// for files named directly on the command line.
#[derive(Error, Debug)]
pub enum CharacterFileFormatError {
    #[error("No reader for '{0}'")]
    UnsupportedExtension(PathBuf),

    #[error("Cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed character file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid character in '{path}': {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Everything that can abort one sheet build.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Format(#[from] CharacterFileFormatError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Template is invalid: {0}")]
    TemplateSyntax(#[from] handlebars::TemplateError),

    #[error("Typesetting failed: {0}")]
    Typeset(#[from] TypesetError),

    #[error("PDF processing failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("PDF composition failed: {0}")]
    Composer(#[from] ComposerError),

    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SheetError {
    /// Whether this is a malformed input file rather than a build failure.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SheetError::Format(_))
    }
}
