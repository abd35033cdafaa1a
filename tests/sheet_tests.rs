mod common;

use common::*;
use sheetwright::{AssemblyState, BuildOptions, SheetError};
use std::path::Path;
use tempfile::tempdir;

fn options(output_dir: &Path) -> BuildOptions {
    BuildOptions { output_dir: output_dir.to_path_buf(), ..Default::default() }
}

#[test]
fn spellcaster_sheet_has_primary_then_supplement_pages() -> TestResult {
    let dir = tempdir()?;
    let file = write_character(dir.path(), "merric.json", &wizard("Merric"));
    let typesetter = FakeTypesetter::pages(2);
    let out = dir.path().join("out");

    let report = builder(typesetter.clone()).make_sheet(&file, &options(&out))?;

    assert_eq!(report.output, out.join("merric.pdf"));
    let names: Vec<_> = report
        .pages
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["merric_char.pdf", "merric_person.pdf", "merric_spells.pdf", "merric_features.pdf"]
    );
    assert_eq!(page_count(&report.output), 5);
    assert_eq!(typesetter.calls(), 1);
    // Intermediate page files are removed outside debug mode.
    assert!(!out.join("merric_char.pdf").exists());
    assert!(!out.join("merric_features.pdf").exists());
    Ok(())
}

#[test]
fn missing_toolchain_keeps_primary_pages() -> TestResult {
    capture_logs();
    let dir = tempdir()?;
    let file = write_character(dir.path(), "merric.json", &wizard("Merric Underbough"));
    let typesetter = FakeTypesetter::missing();

    let report = builder(typesetter.clone()).make_sheet(&file, &options(dir.path()))?;

    assert!(report.skipped_supplement());
    assert!(report.supplement.is_none());
    // Character, personality and spell pages only.
    assert_eq!(page_count(&report.output), 3);
    assert_eq!(typesetter.calls(), 1);

    let warnings = logged(log::Level::Warn, "Merric Underbough");
    assert_eq!(warnings, vec!["fake not available. Skipping features for Merric Underbough"]);
    Ok(())
}

#[test]
fn non_caster_gets_no_spell_pages() -> TestResult {
    let dir = tempdir()?;
    let file = write_character(dir.path(), "tordek.json", &fighter("Tordek"));

    let report = builder(FakeTypesetter::missing()).make_sheet(&file, &options(dir.path()))?;

    assert_eq!(report.pages.len(), 2);
    assert_eq!(page_count(&report.output), 2);
    Ok(())
}

#[test]
fn nothing_to_typeset_skips_the_typesetter() -> TestResult {
    let dir = tempdir()?;
    let file = write_character(dir.path(), "tordek.json", &fighter("Tordek"));
    let typesetter = FakeTypesetter::pages(1);
    let builder = builder(typesetter.clone());

    let mut character = builder.load_character(&file)?;
    character.features.clear();
    // The path only names the output; it is not read again.
    let named = dir.path().join("renamed.json");
    let report = builder.make_character_sheet(&named, Some(&character), &options(dir.path()))?;

    assert_eq!(report.states[0], AssemblyState::NoContent);
    assert_eq!(typesetter.calls(), 0);
    assert_eq!(report.output, dir.path().join("renamed.pdf"));
    assert_eq!(page_count(&report.output), 2);
    Ok(())
}

#[test]
fn debug_keeps_intermediate_files() -> TestResult {
    let dir = tempdir()?;
    let file = write_character(dir.path(), "merric.json", &wizard("Merric"));
    let options = BuildOptions { debug: true, ..options(dir.path()) };

    builder(FakeTypesetter::pages(1)).make_sheet(&file, &options)?;

    for name in ["merric_char.pdf", "merric_person.pdf", "merric_spells.pdf", "merric_features.pdf", "merric.pdf"] {
        assert!(dir.path().join(name).exists(), "{name}");
    }
    Ok(())
}

#[test]
fn unknown_class_is_a_build_failure_not_a_format_error() -> TestResult {
    let dir = tempdir()?;
    let file = write_character(
        dir.path(),
        "odd.json",
        &serde_json::json!({"name": "Odd", "classes": [{"name": "Necromancer", "level": 1}]}),
    );

    let err = builder(FakeTypesetter::missing())
        .make_sheet(&file, &options(dir.path()))
        .unwrap_err();
    assert!(matches!(err, SheetError::Content(_)));
    assert!(!err.is_format_error());
    Ok(())
}
