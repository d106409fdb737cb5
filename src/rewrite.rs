use std::fs;
use std::path::Path;

use crate::error::NormError;
use crate::sniff::eol;
use crate::types::CRLF;

const BOM_CHAR: char = '\u{FEFF}';

/// Render decoded text in canonical form: UTF-8, no BOM, every line
/// (the last one included) terminated by CRLF.
///
/// U+FEFF at the start of the decoded text (a doubled BOM) is dropped too,
/// otherwise it would be written back as `EF BB BF`.
#[must_use]
pub fn canonical(text: &str) -> String {
    let text = text.trim_start_matches(BOM_CHAR);
    let mut out = String::with_capacity(text.len() + text.len() / 32 + CRLF.len());
    for line in eol::lines(text) {
        out.push_str(line);
        out.push_str(CRLF);
    }
    out
}

/// Overwrite `path` in place with the canonical form of `text`.
///
/// This truncates and rewrites the original file; there is no temp file
/// and no rename, so an interrupted write leaves the file partially written.
pub fn write_canonical(path: &Path, text: &str) -> Result<(), NormError> {
    fs::write(path, canonical(text)).map_err(|e| NormError::from_io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_gets_crlf() {
        assert_eq!(canonical("foo\nbar"), "foo\r\nbar\r\n");
        assert_eq!(canonical("foo\nbar\n"), "foo\r\nbar\r\n");
        assert_eq!(canonical("a\rb\r\nc"), "a\r\nb\r\nc\r\n");
    }

    #[test]
    fn leading_bom_char_dropped() {
        assert_eq!(canonical("\u{FEFF}x\n"), "x\r\n");
        assert_eq!(canonical("\u{FEFF}\u{FEFF}x"), "x\r\n");
        assert_eq!(canonical("\u{FEFF}"), "");
        // only a leading one is a BOM; inside a line it's a character
        assert_eq!(canonical("a\u{FEFF}b"), "a\u{FEFF}b\r\n");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(canonical(""), "");
    }

    #[test]
    fn canonical_is_a_fixed_point() {
        let once = canonical("x\n\ny\rz");
        assert_eq!(canonical(&once), once);
        assert!(!eol::has_non_crlf(&once));
    }

    #[test]
    fn overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, b"\xEF\xBB\xBFold contents that are longer\n").unwrap();
        write_canonical(&path, "new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new\r\n");
    }
}
