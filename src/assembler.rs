//! Combines the primary pages with the typeset supplement into the final
//! sheet.

use crate::composer::Fragment;
use crate::error::SheetError;
use crate::forms::{pdf_file, with_suffix};
use log::{debug, info, warn};
use sheetwright_content::Character;
use sheetwright_traits::{ImageOverlayer, PdfMerger, Typesetter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Assembly steps for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// Only preamble and postamble were rendered; nothing to typeset.
    NoContent,
    TypesetPending,
    /// The typesetting toolchain is missing; the supplement is left out.
    Skipped,
    Merge,
    Done,
}

/// What [`DocumentAssembler::assemble`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyReport {
    pub output: PathBuf,
    /// Page files merged into `output`, in order.
    pub pages: Vec<PathBuf>,
    /// The typeset supplement, when one was produced.
    pub supplement: Option<PathBuf>,
    /// States visited, in order.
    pub states: Vec<AssemblyState>,
}

impl AssemblyReport {
    pub fn skipped_supplement(&self) -> bool {
        self.states.contains(&AssemblyState::Skipped)
    }
}

/// Drives the typeset, merge and overlay collaborators.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    typesetter: Arc<dyn Typesetter>,
    merger: Arc<dyn PdfMerger>,
    overlayer: Arc<dyn ImageOverlayer>,
}

impl DocumentAssembler {
    pub fn new(
        typesetter: Arc<dyn Typesetter>,
        merger: Arc<dyn PdfMerger>,
        overlayer: Arc<dyn ImageOverlayer>,
    ) -> Self {
        Self { typesetter, merger, overlayer }
    }

    pub fn with_typesetter(mut self, typesetter: Arc<dyn Typesetter>) -> Self {
        self.typesetter = typesetter;
        self
    }

    pub fn with_merger(mut self, merger: Arc<dyn PdfMerger>) -> Self {
        self.merger = merger;
        self
    }

    pub fn with_overlayer(mut self, overlayer: Arc<dyn ImageOverlayer>) -> Self {
        self.overlayer = overlayer;
        self
    }

    /// Typesets `fragments` when they hold more than preamble and
    /// postamble, then merges `primary_pages` followed by the supplement
    /// into `<basename>.pdf` and draws the character's images on it.
    ///
    /// A missing toolchain only drops the supplement. Every other failure
    /// is returned. Page files are deleted after the merge unless `debug`.
    pub fn assemble(
        &self,
        character: &Character,
        fragments: &[Fragment],
        primary_pages: Vec<PathBuf>,
        basename: &Path,
        debug: bool,
    ) -> Result<AssemblyReport, SheetError> {
        let output = pdf_file(basename);
        let mut pages = primary_pages;
        let mut supplement = None;
        let mut states = Vec::new();

        let mut state = if fragments.len() > 2 {
            AssemblyState::TypesetPending
        } else {
            AssemblyState::NoContent
        };

        loop {
            states.push(state);
            state = match state {
                AssemblyState::NoContent => {
                    debug!("No supplement content for {}", character.name);
                    AssemblyState::Merge
                }
                AssemblyState::TypesetPending => {
                    let source: String = fragments.iter().map(|f| f.markup.as_str()).collect();
                    let features_base = with_suffix(basename, "_features");
                    match self.typesetter.typeset(&source, &features_base.to_string_lossy(), debug) {
                        Ok(pdf) => {
                            pages.push(pdf.clone());
                            supplement = Some(pdf);
                            AssemblyState::Merge
                        }
                        Err(e) if e.is_toolchain_unavailable() => {
                            warn!(
                                "{} not available. Skipping features for {}",
                                self.typesetter.name(),
                                character.name
                            );
                            AssemblyState::Skipped
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                AssemblyState::Skipped => AssemblyState::Merge,
                AssemblyState::Merge => {
                    self.merger.merge(&pages, &output, !debug)?;
                    for image in &character.images {
                        info!("Placing {} on page {} of {}", image.path.display(), image.page, output.display());
                        self.overlayer.insert_image(&output, image)?;
                    }
                    AssemblyState::Done
                }
                AssemblyState::Done => break,
            };
        }

        Ok(AssemblyReport { output, pages, supplement, states })
    }
}
