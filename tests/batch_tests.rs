mod common;

use common::*;
use sheetwright::{discover, BatchConfig, BatchDriver, BatchSummary, BuildOptions, Candidate, SheetError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn driver(output_dir: &Path, debug: bool) -> BatchDriver {
    BatchDriver::new(
        builder(FakeTypesetter::missing()),
        BuildOptions { output_dir: output_dir.to_path_buf(), debug, ..Default::default() },
        BatchConfig { debug, workers: 2 },
    )
}

#[test]
fn directory_discovery_filters_by_extension() -> TestResult {
    let dir = tempdir()?;
    for name in ["a.py", "b.txt", "c.py"] {
        fs::write(dir.path().join(name), "")?;
    }

    let found = discover(&[dir.path().to_path_buf()], &[".py"])?;
    let mut names: Vec<String> = found
        .iter()
        .map(|c| c.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.py", "c.py"]);
    Ok(())
}

#[test]
fn explicitly_named_malformed_file_raises() -> TestResult {
    let dir = tempdir()?;
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ this is not json")?;

    let candidates = discover(&[bad], &["json"])?;
    assert!(candidates[0].explicit);

    let err = driver(dir.path(), false).run(candidates).unwrap_err();
    assert!(err.is_format_error());
    Ok(())
}

#[test]
fn discovered_malformed_file_does_not_abort_siblings() -> TestResult {
    let dir = tempdir()?;
    let party = dir.path().join("party");
    fs::create_dir(&party)?;
    write_character(&party, "tordek.json", &fighter("Tordek"));
    write_character(&party, "merric.json", &wizard("Merric"));
    fs::write(party.join("broken.json"), "[1, 2")?;
    let out = dir.path().join("out");

    let candidates = discover(&[party], &["json"])?;
    assert_eq!(candidates.len(), 3);

    let summary = driver(&out, false).run(candidates)?;
    assert_eq!(summary, BatchSummary { done: 2, invalid: 1, failed: 0 });
    assert!(out.join("tordek.pdf").exists());
    assert!(out.join("merric.pdf").exists());
    assert!(!out.join("broken.pdf").exists());
    Ok(())
}

#[test]
fn other_failures_are_raised_after_siblings_finish() -> TestResult {
    let dir = tempdir()?;
    write_character(
        dir.path(),
        "a_odd.json",
        &serde_json::json!({"name": "Odd", "classes": [{"name": "Necromancer", "level": 1}]}),
    );
    write_character(dir.path(), "b_tordek.json", &fighter("Tordek"));
    let out = dir.path().join("out");

    let candidates = discover(&[dir.path().to_path_buf()], &["json"])?;
    let err = driver(&out, false).run(candidates).unwrap_err();

    assert!(matches!(err, SheetError::Content(_)));
    assert!(out.join("b_tordek.pdf").exists());
    Ok(())
}

#[test]
fn debug_mode_stops_at_the_first_error() -> TestResult {
    let dir = tempdir()?;
    let bad = dir.path().join("a_bad.json");
    fs::write(&bad, "not json at all")?;
    let good = write_character(dir.path(), "b_good.json", &fighter("Good"));
    let out = dir.path().join("out");

    let candidates = vec![
        Candidate { path: bad, explicit: true },
        Candidate { path: good, explicit: true },
    ];
    let err = driver(&out, true).run(candidates).unwrap_err();

    assert!(err.is_format_error());
    assert!(!out.join("b_good.pdf").exists());
    Ok(())
}

#[test]
fn debug_mode_swallows_discovered_format_errors() -> TestResult {
    let dir = tempdir()?;
    fs::write(dir.path().join("a_bad.json"), "{}")?;
    write_character(dir.path(), "b_good.json", &fighter("Good"));
    let out = dir.path().join("out");

    let candidates: Vec<Candidate> = discover(&[dir.path().to_path_buf()], &["json"])?;
    let summary = driver(&out, true).run(candidates)?;

    assert_eq!(summary.done, 1);
    assert_eq!(summary.invalid, 1);
    assert!(out.join("b_good.pdf").exists());
    assert!(!out.join("a_bad.pdf").exists());
    Ok(())
}
