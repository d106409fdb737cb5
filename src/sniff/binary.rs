use crate::types::{BomKind, SAMPLE_LEN};

/// Any NUL byte in the first `SAMPLE_LEN` bytes → binary, unless a UTF-16/32
/// BOM says the zeros are part of the text.
/// Uses memchr for the scan — single SIMD pass, no branching.
#[must_use]
pub fn looks_binary(sample: &[u8], bom: BomKind) -> bool {
    if bom.is_wide() {
        return false;
    }
    let window = &sample[..sample.len().min(SAMPLE_LEN)];
    memchr::memchr(0, window).is_some()
}
