#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use sheetwright::{ContentLibrary, SheetBuilder};
use sheetwright_pdf_composer::{text_document, TextPage};
use sheetwright_traits::{TypesetError, Typesetter};
use serde_json::Value;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Keeps every log record emitted by the process. Tests run in parallel, so
/// callers filter on something unique to their own run.
struct CapturingLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger { records: Mutex::new(Vec::new()) };
static INSTALL_LOGGER: Once = Once::new();

pub fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Captured messages at `level` that mention `needle`.
pub fn logged(level: log::Level, needle: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, message)| *l == level && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}

/// Stands in for pdflatex.
#[derive(Debug)]
pub enum FakeTypesetter {
    /// Writes a document with this many pages.
    Pages(usize, AtomicUsize),
    /// Reports the toolchain as missing.
    Missing(AtomicUsize),
}

impl FakeTypesetter {
    pub fn pages(count: usize) -> Arc<Self> {
        Arc::new(FakeTypesetter::Pages(count, AtomicUsize::new(0)))
    }

    pub fn missing() -> Arc<Self> {
        Arc::new(FakeTypesetter::Missing(AtomicUsize::new(0)))
    }

    pub fn calls(&self) -> usize {
        match self {
            FakeTypesetter::Pages(_, calls) | FakeTypesetter::Missing(calls) => calls.load(Ordering::SeqCst),
        }
    }
}

impl Typesetter for FakeTypesetter {
    fn typeset(&self, source: &str, basename: &str, _keep: bool) -> Result<PathBuf, TypesetError> {
        assert!(source.contains("\\begin{document}"));
        match self {
            FakeTypesetter::Pages(count, calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                let pages: Vec<TextPage> = (1..=*count).map(|i| TextPage::new(format!("Features {i}"))).collect();
                let path = PathBuf::from(format!("{basename}.pdf"));
                let mut doc = text_document(&pages).map_err(|e| TypesetError::Failed {
                    basename: basename.to_string(),
                    message: e.to_string(),
                })?;
                doc.save_to(&mut File::create(&path)?).map_err(|e| TypesetError::Failed {
                    basename: basename.to_string(),
                    message: e.to_string(),
                })?;
                Ok(path)
            }
            FakeTypesetter::Missing(calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TypesetError::ToolchainUnavailable("pdflatex".to_string()))
            }
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub fn builder(typesetter: Arc<FakeTypesetter>) -> SheetBuilder {
    let library = Arc::new(ContentLibrary::standard().unwrap());
    SheetBuilder::new(library).unwrap().with_typesetter(typesetter)
}

pub fn write_character(dir: &Path, file_name: &str, definition: &Value) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(definition).unwrap()).unwrap();
    path
}

pub fn page_count(path: &Path) -> usize {
    let bytes = fs::read(path).unwrap();
    LopdfDocument::load_mem(&bytes).unwrap().get_pages().len()
}

pub fn fighter(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "classes": [{"name": "Fighter", "level": 2}],
        "race": "human",
        "background": "soldier",
    })
}

pub fn wizard(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "classes": [{"name": "Wizard", "level": 3, "subclass": "School of Evocation"}],
        "race": "high_elf",
        "background": "sage",
        "spells": [
            {"name": "Fire Bolt", "level": 0, "school": "Evocation"},
            {"name": "Magic Missile", "level": 1, "school": "Evocation", "description": "Three **glowing** darts."},
            {"name": "Shield", "level": 1, "school": "Abjuration"},
        ],
        "magic_items": [{"name": "Wand of the War Mage", "rarity": "Uncommon", "requires_attunement": true}],
    })
}
