use log::{debug, warn};
use sheetwright_traits::{TypesetError, Typesetter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

const AUXILIARY_EXTENSIONS: [&str; 4] = ["aux", "log", "out", "tex"];

/// Typesets LaTeX sources by running `pdflatex`.
#[derive(Debug, Clone)]
pub struct LatexTypesetter {
    program: String,
}

impl Default for LatexTypesetter {
    fn default() -> Self {
        Self { program: "pdflatex".to_string() }
    }
}

impl LatexTypesetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses another LaTeX engine binary, e.g. `xelatex` or an absolute path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn clean_up(basename: &str) {
        for ext in AUXILIARY_EXTENSIONS {
            let path = PathBuf::from(format!("{basename}.{ext}"));
            if path.exists() {
                if let Err(e) = fs::remove_file(&path) {
                    warn!("Could not remove {}: {}", path.display(), e);
                }
            }
        }
    }
}

/// Last error lines from a LaTeX log (lines starting with `!`).
fn latex_errors(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let errors: Vec<&str> = text.lines().filter(|l| l.starts_with('!')).collect();
    if errors.is_empty() {
        "see the LaTeX log for details".to_string()
    } else {
        errors.join("; ")
    }
}

impl Typesetter for LatexTypesetter {
    fn typeset(
        &self,
        source: &str,
        basename: &str,
        keep_temp_files: bool,
    ) -> Result<PathBuf, TypesetError> {
        let base = Path::new(basename);
        let jobname = base
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| TypesetError::Failed {
                basename: basename.to_string(),
                message: "basename has no file name".to_string(),
            })?;
        let out_dir = match base.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tex_path = PathBuf::from(format!("{basename}.tex"));
        fs::write(&tex_path, source)?;
        debug!("Running {} on {}", self.program, tex_path.display());

        let result = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("-output-directory={}", out_dir.display()))
            .arg(format!("-jobname={jobname}"))
            .arg(&tex_path)
            .output();

        if !keep_temp_files {
            Self::clean_up(basename);
        }

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TypesetError::ToolchainUnavailable(self.program.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            return Err(TypesetError::Failed {
                basename: basename.to_string(),
                message: latex_errors(&output.stdout),
            });
        }
        Ok(PathBuf::from(format!("{basename}.pdf")))
    }

    fn name(&self) -> &str {
        &self.program
    }
}
