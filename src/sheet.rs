// src/sheet.rs
use crate::assembler::{AssemblyReport, DocumentAssembler};
use crate::composer::ContentComposer;
use crate::config::BuildOptions;
use crate::error::SheetError;
use crate::forms::{with_suffix, FormFiller, LopdfFormFiller};
use crate::latex::LatexTypesetter;
use crate::readers::read_sheet_file;
use crate::templating::TemplateEngine;
use log::debug;
use sheetwright_content::{Character, ContentLibrary};
use sheetwright_pdf_composer::{LopdfImageOverlayer, LopdfMerger};
use sheetwright_traits::{ImageOverlayer, PdfMerger, Typesetter};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Builds the sheet for one character file: load, compose, fill the
/// primary pages, then assemble.
///
/// Holds only shared, read-only state, so one builder serves every worker.
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    library: Arc<ContentLibrary>,
    composer: ContentComposer,
    forms: Arc<dyn FormFiller>,
    assembler: DocumentAssembler,
}

impl SheetBuilder {
    /// A builder using `pdflatex` and the lopdf form filler, merger and
    /// image overlayer.
    pub fn new(library: Arc<ContentLibrary>) -> Result<Self, SheetError> {
        Ok(Self {
            library,
            composer: ContentComposer::new(Arc::new(TemplateEngine::new()?)),
            forms: Arc::new(LopdfFormFiller),
            assembler: DocumentAssembler::new(
                Arc::new(LatexTypesetter::new()),
                Arc::new(LopdfMerger),
                Arc::new(LopdfImageOverlayer),
            ),
        })
    }

    pub fn with_typesetter(mut self, typesetter: Arc<dyn Typesetter>) -> Self {
        self.assembler = self.assembler.with_typesetter(typesetter);
        self
    }

    pub fn with_merger(mut self, merger: Arc<dyn PdfMerger>) -> Self {
        self.assembler = self.assembler.with_merger(merger);
        self
    }

    pub fn with_image_overlayer(mut self, overlayer: Arc<dyn ImageOverlayer>) -> Self {
        self.assembler = self.assembler.with_overlayer(overlayer);
        self
    }

    pub fn with_form_filler(mut self, forms: Arc<dyn FormFiller>) -> Self {
        self.forms = forms;
        self
    }

    pub fn library(&self) -> &ContentLibrary {
        &self.library
    }

    pub fn composer(&self) -> &ContentComposer {
        &self.composer
    }

    /// Reads `path` and resolves the character against the library.
    pub fn load_character(&self, path: &Path) -> Result<Character, SheetError> {
        let raw = read_sheet_file(path)?;
        Ok(Character::load(&raw, &self.library)?)
    }

    /// Builds the sheet for the character defined in `path`.
    pub fn make_sheet(&self, path: &Path, options: &BuildOptions) -> Result<AssemblyReport, SheetError> {
        self.make_character_sheet(path, None, options)
    }

    /// Builds a sheet named after `path`. When `character` is given the
    /// file is not read.
    pub fn make_character_sheet(
        &self,
        path: &Path,
        character: Option<&Character>,
        options: &BuildOptions,
    ) -> Result<AssemblyReport, SheetError> {
        let loaded;
        let character = match character {
            Some(character) => character,
            None => {
                loaded = self.load_character(path)?;
                &loaded
            }
        };

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| character.name.clone());
        fs::create_dir_all(&options.output_dir)?;
        let basename = options.output_dir.join(stem);

        let fragments = self.composer.compose(character, options.compose_options())?;

        let mut pages = self.forms.character_pages(character, &with_suffix(&basename, "_char"))?;
        pages.extend(self.forms.personality_pages(character, &with_suffix(&basename, "_person"))?);
        if character.is_spellcaster() {
            pages.extend(self.forms.spell_pages(character, &with_suffix(&basename, "_spells"))?);
        }
        debug!("{} primary page file(s) for {}", pages.len(), character.name);

        self.assembler
            .assemble(character, &fragments, pages, &basename, options.debug)
    }
}
