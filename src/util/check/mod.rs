//! Batch check
//!
//! Parses and validates every notation file found under a set of paths and
//! collects one report entry per file. Directories are walked recursively
//! and filtered by extension; files named explicitly are always checked.

use anyhow::{anyhow, Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::frontend::{Frontend, FrontendError};

/// Options for a batch check
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Extension of the files collected from directories
    pub extension: String,
    /// Colour the text report
    pub colors: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            extension: "model".to_string(),
            colors: false,
        }
    }
}

/// Outcome of checking one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub passed: bool,
    /// Failing stage: lexical, syntax or semantic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileReport {
    fn passed(file: &Path) -> Self {
        Self {
            file: file.display().to_string(),
            passed: true,
            stage: None,
            line: None,
            column: None,
            message: None,
        }
    }

    fn failed(
        file: &Path,
        error: &FrontendError,
    ) -> Self {
        let token = match error {
            FrontendError::Parse(err) => err.token(),
            _ => None,
        };
        Self {
            file: file.display().to_string(),
            passed: false,
            stage: Some(error.stage().to_string()),
            line: token.map(|t| t.line()),
            column: token.map(|t| t.column()),
            message: Some(error.to_string()),
        }
    }
}

/// Reports for every checked file, in the order they were collected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.files.iter().all(|f| f.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.passed)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.files).context("Failed to serialize check report")
    }

    /// Human readable report: each failure with its full message, then a
    /// summary line.
    pub fn render_text(
        &self,
        colors: bool,
    ) -> String {
        let mut out = String::new();
        for failure in self.failures() {
            let header = format!("error: {}", failure.file);
            if colors {
                out.push_str(&header.red().bold().to_string());
            } else {
                out.push_str(&header);
            }
            out.push('\n');
            if let Some(message) = &failure.message {
                out.push_str(message);
                if !message.ends_with('\n') {
                    out.push('\n');
                }
            }
            out.push('\n');
        }

        let count = self.files.len();
        let plural = if count == 1 { "" } else { "s" };
        let failed = self.failures().count();
        let summary = if failed == 0 {
            format!("All checks passed ({} file{})", count, plural)
        } else {
            format!("{} of {} file{} failed", failed, count, plural)
        };
        match (colors, failed == 0) {
            (true, true) => out.push_str(&summary.green().to_string()),
            (true, false) => out.push_str(&summary.red().to_string()),
            (false, _) => out.push_str(&summary),
        }
        out.push('\n');
        out
    }
}

/// Check every file under the given paths
pub fn check_paths(
    frontend: &Frontend,
    paths: &[PathBuf],
    options: &CheckOptions,
) -> Result<CheckReport> {
    let files = collect_source_files(paths, &options.extension)?;
    if files.is_empty() {
        warn!("No .{} files found in the specified paths", options.extension);
    }

    let mut report = CheckReport::default();
    for file in &files {
        report.files.push(check_file(frontend, file)?);
    }
    debug!(
        "Checked {} files, {} failed",
        report.files.len(),
        report.failures().count()
    );
    Ok(report)
}

/// Parse and validate a single file; only I/O problems are errors
pub fn check_file(
    frontend: &Frontend,
    file: &Path,
) -> Result<FileReport> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file {}", file.display()))?;
    Ok(match frontend.check(&source) {
        Ok(_) => FileReport::passed(file),
        Err(err) => FileReport::failed(file, &err),
    })
}

/// Collect notation files from files and directories, sorted within each
/// directory
pub fn collect_source_files(
    paths: &[PathBuf],
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(anyhow!("Path does not exist: {}", path.display()));
        }

        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let walker = WalkDir::new(path).follow_links(true).sort_by_file_name();
            for entry in walker {
                let entry = entry.with_context(|| {
                    format!("Failed to read directory entry in {}", path.display())
                })?;
                if entry.file_type().is_file()
                    && entry.path().extension().and_then(|s| s.to_str()) == Some(extension)
                {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    Ok(files)
}
