// src/config.rs
use std::path::PathBuf;

/// Options for the Content Composer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Group the spellbook by spell level instead of listing alphabetically.
    pub spell_order: bool,
}

/// Options for building one character sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep intermediate files and log verbosely.
    pub debug: bool,
    pub spell_order: bool,
    /// Where page files and the final sheet are written.
    pub output_dir: PathBuf,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            debug: false,
            spell_order: false,
            output_dir: PathBuf::from("."),
        }
    }
}

impl BuildOptions {
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions { spell_order: self.spell_order }
    }
}

/// How the batch driver schedules builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Sequential, fail-fast execution.
    pub debug: bool,
    /// Worker pool size in normal mode.
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            debug: false,
            workers: num_cpus::get(),
        }
    }
}
