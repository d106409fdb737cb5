use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::decode;
use crate::error::NormError;
use crate::rewrite;
use crate::sniff::{self, binary, bom, eol};
use crate::types::{BomKind, FileOutcome, Tally, Unwritable};

/// Run one file through the pipeline and classify what happened.
/// Never fails: every per-file error becomes an outcome.
pub fn process_file(path: &Path) -> FileOutcome {
    match standardize(path) {
        Ok(outcome) => outcome,
        Err(NormError::PermissionDenied { .. }) => {
            debug!(path = %path.display(), "access denied");
            FileOutcome::SkippedUnwritable(Unwritable::AccessDenied)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "file failed");
            FileOutcome::Error(e.to_string())
        }
    }
}

/// Process files strictly in order, handing each outcome to `report` as soon
/// as it is known. Returns the totals.
pub fn process_all<F>(files: &[PathBuf], mut report: F) -> Tally
where
    F: FnMut(&Path, &FileOutcome),
{
    files.iter().fold(Tally::default(), |tally, path| {
        let outcome = process_file(path);
        report(path, &outcome);
        tally.record(&outcome)
    })
}

/// read-only? → sample → BOM → binary? → line endings → decode → rewrite.
/// Each phase opens and closes its own handle.
fn standardize(path: &Path) -> Result<FileOutcome, NormError> {
    let meta = fs::metadata(path).map_err(|e| NormError::from_io(path, e))?;
    if meta.permissions().readonly() {
        debug!(path = %path.display(), "read-only, not touching");
        return Ok(FileOutcome::SkippedUnwritable(Unwritable::ReadOnly));
    }

    let sample = sniff::read_sample(path)?;
    let bom = bom::detect(&sample);
    if binary::looks_binary(&sample, bom) {
        debug!(path = %path.display(), "NUL byte in sample, treating as binary");
        return Ok(FileOutcome::SkippedBinary);
    }

    let bytes = fs::read(path).map_err(|e| NormError::from_io(path, e))?;
    let needs_eol_fix = eol::has_non_crlf(&decode::decode_lossy(&bytes, bom));
    debug!(path = %path.display(), %bom, needs_eol_fix, "sniffed");

    if bom == BomKind::None && !needs_eol_fix {
        return Ok(FileOutcome::AlreadyStandard);
    }

    let text = decode::decode(path, &bytes, bom)?;
    rewrite::write_canonical(path, &text)?;
    Ok(FileOutcome::Converted)
}
