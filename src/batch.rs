//! Finds character files and builds them, one task per file.

use crate::config::{BatchConfig, BuildOptions};
use crate::error::SheetError;
use crate::readers::extension_of;
use crate::sheet::SheetBuilder;
use log::{debug, info};
use sheetwright_executor::ExecutorImpl;
use sheetwright_traits::Executor;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Named directly on the command line rather than found in a directory.
    pub explicit: bool,
}

fn matches_extension<S: AsRef<str>>(path: &Path, known_extensions: &[S]) -> bool {
    let Some(ext) = extension_of(path) else {
        return false;
    };
    known_extensions
        .iter()
        .any(|known| known.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

/// Expands `args` into the files to build.
///
/// Files are kept when their extension is known. Directories are expanded
/// one level, not recursively, in name order. No arguments means the
/// current directory. Extensions may be given with or without the dot.
pub fn discover<S: AsRef<str>>(args: &[PathBuf], known_extensions: &[S]) -> io::Result<Vec<Candidate>> {
    let defaulted = [PathBuf::from(".")];
    let (args, explicit) = if args.is_empty() {
        (&defaulted[..], false)
    } else {
        (args, true)
    };

    let mut candidates = Vec::new();
    for arg in args {
        if arg.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(arg)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<io::Result<_>>()?;
            entries.sort();
            for entry in entries {
                if entry.is_dir() {
                    continue;
                }
                if matches_extension(&entry, known_extensions) {
                    candidates.push(Candidate { path: entry, explicit: false });
                } else {
                    info!("Unhandled file: {}", entry.display());
                }
            }
        } else if matches_extension(arg, known_extensions) {
            candidates.push(Candidate { path: arg.clone(), explicit });
        } else {
            info!("Unhandled file: {}", arg.display());
        }
    }
    debug!("Discovered {} character file(s)", candidates.len());
    Ok(candidates)
}

/// How one build ended, when it did not raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Done,
    /// The file was malformed and was not explicitly requested.
    Invalid,
}

/// Builds one candidate, printing its status line.
///
/// A malformed file is reported and only raised when the candidate is
/// explicit. Any other failure is reported and raised.
pub fn build_one(
    builder: &SheetBuilder,
    candidate: &Candidate,
    options: &BuildOptions,
) -> Result<BuildOutcome, SheetError> {
    let name = candidate
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| candidate.path.display().to_string());
    println!("Processing {name}...");

    match builder.make_sheet(&candidate.path, options) {
        Ok(report) => {
            debug!("{} written to {}", name, report.output.display());
            println!("{name} done");
            Ok(BuildOutcome::Done)
        }
        Err(e) if e.is_format_error() => {
            println!("invalid {name}");
            info!("{e}");
            if candidate.explicit {
                Err(e)
            } else {
                Ok(BuildOutcome::Invalid)
            }
        }
        Err(e) => {
            println!("{name} failed");
            Err(e)
        }
    }
}

/// Counts of how the builds in a batch ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub done: usize,
    /// Malformed files, raised or not.
    pub invalid: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, result: &Result<BuildOutcome, SheetError>) {
        match result {
            Ok(BuildOutcome::Done) => self.done += 1,
            Ok(BuildOutcome::Invalid) => self.invalid += 1,
            Err(e) if e.is_format_error() => self.invalid += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.done + self.invalid + self.failed
    }
}

/// Runs builds sequentially (debug) or on a fixed-size worker pool.
#[derive(Debug, Clone)]
pub struct BatchDriver {
    builder: Arc<SheetBuilder>,
    options: BuildOptions,
    config: BatchConfig,
}

impl BatchDriver {
    pub fn new(builder: SheetBuilder, options: BuildOptions, config: BatchConfig) -> Self {
        Self { builder: Arc::new(builder), options, config }
    }

    /// Builds every candidate.
    ///
    /// In debug mode the first raised error stops the batch. Otherwise
    /// every build runs to completion and the first raised error, in
    /// candidate order, is returned afterwards.
    pub fn run(&self, candidates: Vec<Candidate>) -> Result<BatchSummary, SheetError> {
        let mut summary = BatchSummary::default();

        if self.config.debug {
            for candidate in &candidates {
                debug!("building {}", candidate.path.display());
                let result = build_one(&self.builder, candidate, &self.options);
                summary.record(&result);
                result?;
            }
            return Ok(summary);
        }

        let executor = ExecutorImpl::for_workers(self.config.workers)?;
        info!(
            "Building {} sheet(s) with {} ({} workers)",
            candidates.len(),
            executor.name(),
            executor.parallelism()
        );
        let builder = Arc::clone(&self.builder);
        let options = self.options.clone();
        let results = executor.execute_all_fallible(candidates, move |candidate: Candidate| {
            build_one(&builder, &candidate, &options)
        });

        let mut first_error = None;
        for result in results {
            summary.record(&result);
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        info!(
            "{} done, {} invalid, {} failed",
            summary.done, summary.invalid, summary.failed
        );
        match first_error {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "{}").unwrap();
        path
    }

    #[test]
    fn directories_expand_one_level() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.json");
        touch(dir.path(), "a.json");
        touch(dir.path(), "notes.txt");
        let nested = dir.path().join("party");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.json");

        let found = discover(&[dir.path().to_path_buf()], &["json"]).unwrap();
        let names: Vec<_> = found.iter().map(|c| c.path.file_name().unwrap().to_owned()).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
        assert!(found.iter().all(|c| !c.explicit));
    }

    #[test]
    fn explicit_files_are_flagged() {
        let dir = tempdir().unwrap();
        let hero = touch(dir.path(), "hero.json");
        let notes = touch(dir.path(), "notes.md");

        let found = discover(&[hero.clone(), notes], &[".json"]).unwrap();
        assert_eq!(found, vec![Candidate { path: hero, explicit: true }]);
    }

    #[test]
    fn summary_counts() {
        let mut summary = BatchSummary::default();
        summary.record(&Ok(BuildOutcome::Done));
        summary.record(&Ok(BuildOutcome::Invalid));
        summary.record(&Err(SheetError::Io(io::Error::other("disk full"))));
        assert_eq!(summary, BatchSummary { done: 1, invalid: 1, failed: 1 });
        assert_eq!(summary.total(), 3);
    }
}
