use crate::types::BomKind;

/// Classify the leading bytes of a file. Longer markers are tried first:
/// `FF FE 00 00` is UTF-32 LE, not UTF-16 LE followed by a NUL character.
#[must_use]
pub fn detect(bytes: &[u8]) -> BomKind {
    match bytes {
        [0x00, 0x00, 0xFE, 0xFF, ..] => BomKind::Utf32Be,
        [0xFF, 0xFE, 0x00, 0x00, ..] => BomKind::Utf32Le,
        [0xEF, 0xBB, 0xBF, ..] => BomKind::Utf8,
        [0xFE, 0xFF, ..] => BomKind::Utf16Be,
        [0xFF, 0xFE, ..] => BomKind::Utf16Le,
        _ => BomKind::None,
    }
}
