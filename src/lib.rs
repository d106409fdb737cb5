#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,   // Rust naming conventions
    clippy::missing_errors_doc,        // one error type, documented on the enum
    clippy::missing_panics_doc,        // same
    clippy::must_use_candidate,        // string builders in format.rs
)]

pub mod decode;
pub mod error;
pub mod format;
pub mod logging;
pub mod pipeline;
pub mod rewrite;
pub mod sniff;
pub mod types;
pub mod walk;

use std::path::Path;

use error::NormError;
use types::{FileOutcome, Tally};

pub use pipeline::{process_all, process_file};
pub use walk::discover;

/// Check that `root` is an existing directory. Anything else ends the run
/// before a single file is touched.
pub fn check_root(root: &Path) -> Result<(), NormError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(NormError::DirectoryNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// The single library entry point:
/// check root → discover files → process each in order → totals.
/// `report` sees every outcome as it happens; the library never prints.
pub fn run<F>(root: &Path, report: F) -> Result<Tally, NormError>
where
    F: FnMut(&Path, &FileOutcome),
{
    check_root(root)?;
    let files = discover(root)?;
    Ok(process_all(&files, report))
}
