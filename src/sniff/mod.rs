pub mod binary;
pub mod bom;
pub mod eol;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::NormError;
use crate::types::SAMPLE_LEN;

/// Read the first `SAMPLE_LEN` bytes (fewer if the file is shorter).
/// The handle is closed before returning.
pub fn read_sample(path: &Path) -> Result<Vec<u8>, NormError> {
    let file = File::open(path).map_err(|e| NormError::from_io(path, e))?;
    let mut buf = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64)
        .read_to_end(&mut buf)
        .map_err(|e| NormError::from_io(path, e))?;
    Ok(buf)
}
