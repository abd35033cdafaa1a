//! Seams for PDF post-processing: merging page files and drawing images.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for merge and overlay operations.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Cannot merge an empty list of page files")]
    NothingToMerge,

    #[error("Failed to process PDF '{path}': {message}")]
    Failed { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where to draw an image on an existing document.
///
/// Coordinates are PDF points measured from the bottom-left corner of the
/// page. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub path: PathBuf,
    #[serde(default = "first_page")]
    pub page: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

fn first_page() -> u32 {
    1
}

/// Concatenates page files into one output document.
pub trait PdfMerger: Send + Sync + Debug {
    /// Merge `sources` in order into `dest`, overwriting it.
    ///
    /// When `clean_up` is set the sources are deleted once `dest` exists.
    fn merge(&self, sources: &[PathBuf], dest: &Path, clean_up: bool) -> Result<(), PdfError>;
}

/// Draws an image onto a page of an existing document, in place.
pub trait ImageOverlayer: Send + Sync + Debug {
    fn insert_image(&self, pdf: &Path, placement: &ImagePlacement) -> Result<(), PdfError>;
}
