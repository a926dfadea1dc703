//! Running the external `mkdssp` program.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use betaturn_core::{BetaTurnError, Result};
use betaturn_struct::io::StructureFormat;

use super::{AnnotationTable, SecondaryStructureSource};

/// Default location of the mkdssp executable.
pub const DEFAULT_MKDSSP: &str = "/usr/local/bin/mkdssp";

/// Annotates structures by running mkdssp (DSSP 4) and reading its mmCIF output.
#[derive(Debug, Clone)]
pub struct Mkdssp {
    executable: PathBuf,
    keep_output: Option<PathBuf>,
}

impl Mkdssp {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            keep_output: None,
        }
    }

    /// Write the annotator output to `path` and leave it there after the run.
    pub fn keep_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.keep_output = Some(path.into());
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run mkdssp on `input`, writing its mmCIF output to `output`.
    ///
    /// The input is decompressed and copied to a temporary file without its
    /// `_audit_conform.` lines, which mkdssp rejects in AlphaFold models.
    ///
    /// # Errors
    ///
    /// [`BetaTurnError::Io`] if the input or executable is missing or the
    /// process cannot be spawned, [`BetaTurnError::Annotator`] with mkdssp's
    /// stderr if it exits unsuccessfully.
    pub fn run(&self, input: &Path, output: &Path) -> Result<()> {
        if !input.is_file() {
            return Err(not_found("structure file", input));
        }
        if !self.executable.is_file() {
            return Err(not_found("mkdssp executable", &self.executable));
        }

        let text = betaturn_core::compress::read_text(input)?;
        let suffix = match StructureFormat::from_path(input) {
            Some(StructureFormat::Pdb) => ".pdb",
            _ => ".cif",
        };
        let mut cleaned = tempfile::Builder::new()
            .prefix("betaturn-")
            .suffix(suffix)
            .tempfile()?;
        for line in text.lines().filter(|l| !l.starts_with("_audit_conform.")) {
            writeln!(cleaned, "{}", line)?;
        }
        cleaned.flush()?;

        log::info!(
            "running {} on {}",
            self.executable.display(),
            input.display()
        );
        let result = Command::new(&self.executable)
            .arg(cleaned.path())
            .arg(output)
            .output()?;

        if !result.status.success() {
            return Err(BetaTurnError::Annotator {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Mkdssp {
    fn default() -> Self {
        Self::new(DEFAULT_MKDSSP)
    }
}

impl SecondaryStructureSource for Mkdssp {
    fn annotate(&self, path: &Path) -> Result<AnnotationTable> {
        match &self.keep_output {
            Some(output) => {
                self.run(path, output)?;
                AnnotationTable::from_file(output)
            }
            None => {
                let dir = tempfile::tempdir()?;
                let output = dir.path().join(format!("{}_dssp.cif", file_root(path)));
                self.run(path, &output)?;
                AnnotationTable::from_file(&output)
            }
        }
    }
}

/// Annotations read from an mkdssp output file produced earlier.
#[derive(Debug, Clone)]
pub struct PrecomputedDssp {
    path: PathBuf,
}

impl PrecomputedDssp {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecondaryStructureSource for PrecomputedDssp {
    fn annotate(&self, _path: &Path) -> Result<AnnotationTable> {
        log::debug!("reading annotations from {}", self.path.display());
        AnnotationTable::from_file(&self.path)
    }
}

fn file_root(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("structure")
        .to_string()
}

fn not_found(what: &str, path: &Path) -> BetaTurnError {
    BetaTurnError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("{} not found: {}", what, path.display()),
    ))
}
