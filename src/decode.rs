use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::error::NormError;
use crate::types::BomKind;

/// How to turn a file's bytes into text, picked from its BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    /// Decoded by `encoding_rs` after the BOM is skipped. Malformed input is replaced.
    Whatwg(&'static Encoding),
    /// `encoding_rs` has no UTF-32; decoded by hand. Malformed input is replaced.
    Utf32 { big_endian: bool },
    /// No BOM: UTF-8 by convention, and malformed input is an error.
    StrictUtf8,
}

/// Map a BOM to the decoding used for the full-file read.
#[must_use]
pub fn resolve(bom: BomKind) -> Decoding {
    match bom {
        BomKind::Utf8 => Decoding::Whatwg(UTF_8),
        BomKind::Utf16Le => Decoding::Whatwg(UTF_16LE),
        BomKind::Utf16Be => Decoding::Whatwg(UTF_16BE),
        BomKind::Utf32Le => Decoding::Utf32 { big_endian: false },
        BomKind::Utf32Be => Decoding::Utf32 { big_endian: true },
        BomKind::None => Decoding::StrictUtf8,
    }
}

/// Decode a whole file's bytes. The BOM is consumed, never part of the result.
pub fn decode<'a>(path: &Path, bytes: &'a [u8], bom: BomKind) -> Result<Cow<'a, str>, NormError> {
    let body = bytes.strip_prefix(bom.signature()).unwrap_or(bytes);
    match resolve(bom) {
        Decoding::Whatwg(enc) => Ok(enc.decode_without_bom_handling(body).0),
        Decoding::Utf32 { big_endian } => Ok(Cow::Owned(decode_utf32(body, big_endian))),
        Decoding::StrictUtf8 => std::str::from_utf8(body)
            .map(Cow::Borrowed)
            .map_err(|e| NormError::Decode {
                path: path.to_path_buf(),
                encoding: bom,
                offset: e.valid_up_to(),
            }),
    }
}

/// Decode for line-ending inspection only. Never fails: a BOM-less file is
/// read as UTF-8 with replacement, so an undecodable byte doesn't hide its
/// line endings.
#[must_use]
pub fn decode_lossy(bytes: &[u8], bom: BomKind) -> Cow<'_, str> {
    let body = bytes.strip_prefix(bom.signature()).unwrap_or(bytes);
    match resolve(bom) {
        Decoding::Whatwg(enc) => enc.decode_without_bom_handling(body).0,
        Decoding::Utf32 { big_endian } => Cow::Owned(decode_utf32(body, big_endian)),
        Decoding::StrictUtf8 => String::from_utf8_lossy(body),
    }
}

fn decode_utf32(body: &[u8], big_endian: bool) -> String {
    let chunks = body.chunks_exact(4);
    let trailing = !chunks.remainder().is_empty();
    let mut out = String::with_capacity(body.len() / 4 + usize::from(trailing));
    for chunk in chunks {
        let unit = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let scalar = if big_endian {
            u32::from_be_bytes(unit)
        } else {
            u32::from_le_bytes(unit)
        };
        out.push(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    if trailing {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    out
}
