use std::fmt::Write;
use std::path::Path;

use serde::Serialize;

use crate::types::{FileOutcome, Tally};
use crate::walk::{EXTENSIONS, SKIP_DIRS};

/// Startup banner: what the tool does to the files it touches.
pub fn banner() -> String {
    let exts = dotted(EXTENSIONS);
    format!(
        "srcnorm — source file standardization\n\
         Converts {exts} files to:\n\
         - Encoding: UTF-8 (without BOM)\n\
         - Line endings: Windows (CRLF)\n"
    )
}

pub fn found(count: usize) -> String {
    format!("Found {count} files to process. Starting conversion...\n")
}

pub fn no_matches() -> String {
    format!(
        "No matching files ({}) were found in the specified directory (excluding {}).",
        dotted(EXTENSIONS),
        SKIP_DIRS.join(", ")
    )
}

/// One report line per file: `  -> <Tag>: <path>`, plus an indented
/// message line for errors.
pub fn outcome_line(path: &Path, outcome: &FileOutcome) -> String {
    let mut out = format!("  -> {outcome}: {}", path.display());
    if let FileOutcome::Error(message) = outcome {
        let _ = write!(out, "\n     {message}");
    }
    out
}

/// The end-of-run totals block.
pub fn summary(tally: &Tally) -> String {
    let mut out = String::from("\nDone.\n");
    let _ = writeln!(out, "Converted: {}", tally.converted);
    let _ = writeln!(out, "Already standard: {}", tally.already_standard);
    let _ = writeln!(out, "Skipped (binary-like): {}", tally.skipped_binary);
    let _ = writeln!(
        out,
        "Skipped (read-only/access denied): {}",
        tally.skipped_unwritable
    );
    let _ = write!(out, "Errors: {}", tally.errors);
    out
}

/// One file in the `--json` report.
#[derive(Debug, Serialize)]
pub struct FileRecord {
    pub path: String,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileRecord {
    pub fn new(path: &Path, outcome: &FileOutcome) -> Self {
        Self {
            path: path.display().to_string(),
            outcome: outcome.kind(),
            message: match outcome {
                FileOutcome::Error(m) => Some(m.clone()),
                _ => None,
            },
        }
    }
}

/// The whole run as a single JSON document.
pub fn json_report(root: &Path, files: &[FileRecord], tally: &Tally) -> serde_json::Value {
    serde_json::json!({
        "root": root.display().to_string(),
        "files": files,
        "summary": tally,
    })
}

fn dotted(exts: &[&str]) -> String {
    exts.iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ")
}
