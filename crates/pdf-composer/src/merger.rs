use crate::{merge_documents, set_need_appearances, ComposerError};
use lopdf::Document;
use log::debug;
use sheetwright_traits::{PdfError, PdfMerger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

fn load(path: &Path) -> Result<Document, ComposerError> {
    Ok(Document::load_from(File::open(path)?)?)
}

/// Merges the page files at `sources`, in order, into `dest`.
///
/// The first source becomes the base document; the pages of every later
/// source are appended to it. Sources are deleted afterwards when
/// `clean_up` is set.
pub fn merge_files(sources: &[PathBuf], dest: &Path, clean_up: bool) -> Result<(), ComposerError> {
    let Some((first, rest)) = sources.split_first() else {
        return Err(ComposerError::Other("no page files to merge".to_string()));
    };

    let mut merged = load(first)?;
    for source in rest {
        debug!("Appending {} to {}", source.display(), dest.display());
        merge_documents(&mut merged, load(source)?)?;
    }
    set_need_appearances(&mut merged)?;
    merged.save_to(&mut File::create(dest)?)?;

    if clean_up {
        for source in sources {
            // The destination may share a name with one of its sources.
            if source.as_path() != dest {
                fs::remove_file(source)?;
            }
        }
    }
    Ok(())
}

/// [`PdfMerger`] backed by lopdf.
#[derive(Debug, Clone, Default)]
pub struct LopdfMerger;

impl PdfMerger for LopdfMerger {
    fn merge(&self, sources: &[PathBuf], dest: &Path, clean_up: bool) -> Result<(), PdfError> {
        if sources.is_empty() {
            return Err(PdfError::NothingToMerge);
        }
        merge_files(sources, dest, clean_up).map_err(|e| match e {
            ComposerError::Io(io) => PdfError::Io(io),
            other => PdfError::Failed {
                path: dest.to_path_buf(),
                message: other.to_string(),
            },
        })
    }
}
