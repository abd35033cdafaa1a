//! Readers that turn character files into [`RawCharacter`] definitions.

use crate::error::CharacterFileFormatError;
use log::debug;
use once_cell::sync::Lazy;
use sheetwright_content::RawCharacter;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parses one character file.
pub type Reader = fn(&Path) -> Result<RawCharacter, CharacterFileFormatError>;

static READERS_BY_EXTENSION: Lazy<BTreeMap<&'static str, Reader>> = Lazy::new(|| {
    let mut readers: BTreeMap<&'static str, Reader> = BTreeMap::new();
    readers.insert("json", read_json);
    readers
});

/// Known extensions (without the leading dot) and their readers.
pub fn readers_by_extension() -> &'static BTreeMap<&'static str, Reader> {
    &READERS_BY_EXTENSION
}

/// Extension of `path` without the dot, lowercased.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

pub fn reader_for(path: &Path) -> Option<Reader> {
    extension_of(path).and_then(|ext| READERS_BY_EXTENSION.get(ext.as_str()).copied())
}

/// Reads and structurally validates the character defined in `path`.
pub fn read_sheet_file(path: &Path) -> Result<RawCharacter, CharacterFileFormatError> {
    let reader = reader_for(path)
        .ok_or_else(|| CharacterFileFormatError::UnsupportedExtension(path.to_path_buf()))?;
    let raw = reader(path)?;
    raw.validate()
        .map_err(|reason| CharacterFileFormatError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
    debug!("Read '{}' from {}", raw.name, path.display());
    Ok(raw)
}

fn read_json(path: &Path) -> Result<RawCharacter, CharacterFileFormatError> {
    let text = fs::read_to_string(path).map_err(|source| CharacterFileFormatError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CharacterFileFormatError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
