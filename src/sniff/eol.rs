/// Does `text` contain a line ending other than CRLF? Stops at the first
/// bare `\n` or lone `\r`.
#[must_use]
pub fn has_non_crlf(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while let Some(off) = memchr::memchr2(b'\r', b'\n', &bytes[pos..]) {
        let i = pos + off;
        if bytes[i] == b'\n' || bytes.get(i + 1) != Some(&b'\n') {
            return true;
        }
        pos = i + 2;
    }
    false
}

/// Split decoded text into lines the way the rewriter needs them: `\r\n`,
/// `\n` and lone `\r` all end a line, and a terminator at the very end does
/// not start another one.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let Some(i) = memchr::memchr2(b'\r', b'\n', bytes) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..i];
        let skip = if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            2
        } else {
            1
        };
        self.rest = &self.rest[i + skip..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_only_is_canonical() {
        assert!(!has_non_crlf("a\r\nb\r\n"));
        assert!(!has_non_crlf("no newline at all"));
        assert!(!has_non_crlf(""));
        assert!(!has_non_crlf("\r\n\r\n"));
    }

    #[test]
    fn bare_lf_detected() {
        assert!(has_non_crlf("a\nb\r\n"));
        assert!(has_non_crlf("a\r\nb\n"));
    }

    #[test]
    fn lone_cr_detected() {
        assert!(has_non_crlf("a\rb"));
        assert!(has_non_crlf("a\r"));
        // \r\r\n: the first \r is alone
        assert!(has_non_crlf("a\r\r\n"));
    }

    #[test]
    fn non_ascii_text() {
        assert!(!has_non_crlf("größe\r\nüber\r\n"));
        assert!(has_non_crlf("größe\nüber"));
    }

    #[test]
    fn lines_split_on_every_terminator() {
        let got: Vec<&str> = lines("a\r\nb\nc\rd").collect();
        assert_eq!(got, ["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(lines("foo\nbar\n").collect::<Vec<_>>(), ["foo", "bar"]);
        assert_eq!(lines("foo\r\n").collect::<Vec<_>>(), ["foo"]);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn blank_lines_kept() {
        assert_eq!(lines("\n").collect::<Vec<_>>(), [""]);
        assert_eq!(lines("a\n\nb").collect::<Vec<_>>(), ["a", "", "b"]);
        assert_eq!(lines("a\r\r\nb").collect::<Vec<_>>(), ["a", "", "b"]);
    }
}
