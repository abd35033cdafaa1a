//! Builds printable character sheets from character definitions.
//!
//! A sheet is assembled in a fixed sequence: the character file is read
//! ([`readers`]) and resolved against the shared [`ContentLibrary`], the
//! [`ContentComposer`] renders the supplement sections, the [`FormFiller`]
//! writes the primary pages, and the [`DocumentAssembler`] typesets, merges
//! and overlays images. [`BatchDriver`] runs that pipeline over many files.

pub mod assembler;
pub mod batch;
pub mod composer;
pub mod config;
pub mod error;
pub mod forms;
pub mod latex;
pub mod readers;
pub mod sheet;
pub mod templating;

pub use assembler::{AssemblyReport, AssemblyState, DocumentAssembler};
pub use batch::{build_one, discover, BatchDriver, BatchSummary, BuildOutcome, Candidate};
pub use composer::{ContentComposer, Fragment, SectionKind};
pub use config::{BatchConfig, BuildOptions, ComposeOptions};
pub use error::{CharacterFileFormatError, SheetError};
pub use forms::{FormFiller, LopdfFormFiller};
pub use latex::LatexTypesetter;
pub use readers::{read_sheet_file, readers_by_extension};
pub use sheet::SheetBuilder;
pub use templating::TemplateEngine;

pub use sheetwright_content::{Character, ContentLibrary, RawCharacter};
