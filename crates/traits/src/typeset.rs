//! Typesetter trait for turning markup into a page file.

use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for typesetting operations.
///
/// `ToolchainUnavailable` is kept apart from every other failure: callers
/// degrade gracefully on it and propagate everything else.
#[derive(Error, Debug)]
pub enum TypesetError {
    #[error("Typesetting toolchain '{0}' is not available")]
    ToolchainUnavailable(String),

    #[error("Typesetting '{basename}' failed: {message}")]
    Failed { basename: String, message: String },

    #[error("I/O error while typesetting: {0}")]
    Io(#[from] std::io::Error),
}

impl TypesetError {
    pub fn is_toolchain_unavailable(&self) -> bool {
        matches!(self, TypesetError::ToolchainUnavailable(_))
    }
}

/// A blocking typesetting backend.
///
/// # Implementations
///
/// - `LatexTypesetter` (sheetwright): shells out to `pdflatex`
pub trait Typesetter: Send + Sync + Debug {
    /// Typeset `source` into `<basename>.pdf` and return the produced file.
    ///
    /// Intermediate files (sources, logs) are removed unless
    /// `keep_temp_files` is set.
    fn typeset(
        &self,
        source: &str,
        basename: &str,
        keep_temp_files: bool,
    ) -> Result<PathBuf, TypesetError>;

    /// The tool named in log messages.
    fn name(&self) -> &str;
}
