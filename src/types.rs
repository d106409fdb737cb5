use serde::Serialize;

/// Bytes sampled from the head of each file for BOM and binary sniffing.
pub const SAMPLE_LEN: usize = 8192;

/// Canonical line terminator written by the rewriter.
pub const CRLF: &str = "\r\n";

/// Byte-order mark found at the start of a file. Checked longest-first,
/// so a UTF-32 LE mark never reads as UTF-16 LE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BomKind {
    None,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// The marker bytes, empty for `None`.
    #[must_use]
    pub const fn signature(self) -> &'static [u8] {
        match self {
            Self::None => &[],
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
        }
    }

    /// UTF-16 and UTF-32 text is full of zero bytes; the binary sniff must not look at it.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(
            self,
            Self::Utf16Le | Self::Utf16Be | Self::Utf32Le | Self::Utf32Be
        )
    }
}

impl std::fmt::Display for BomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16Le => write!(f, "UTF-16LE"),
            Self::Utf16Be => write!(f, "UTF-16BE"),
            Self::Utf32Le => write!(f, "UTF-32LE"),
            Self::Utf32Be => write!(f, "UTF-32BE"),
        }
    }
}

/// Why a file was left alone because it cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwritable {
    /// The read-only attribute is set.
    ReadOnly,
    /// The OS refused to open it.
    AccessDenied,
}

/// What happened to one file. Produced exactly once per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    AlreadyStandard,
    SkippedBinary,
    SkippedUnwritable(Unwritable),
    Error(String),
}

impl FileOutcome {
    /// Stable machine-readable tag, used by `--json`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Converted => "converted",
            Self::AlreadyStandard => "already-standard",
            Self::SkippedBinary => "skipped-binary",
            Self::SkippedUnwritable(Unwritable::ReadOnly) => "skipped-read-only",
            Self::SkippedUnwritable(Unwritable::AccessDenied) => "skipped-access-denied",
            Self::Error(_) => "error",
        }
    }
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converted => write!(f, "Standardized"),
            Self::AlreadyStandard => write!(f, "Already standard"),
            Self::SkippedBinary => write!(f, "Skipped (binary-like)"),
            Self::SkippedUnwritable(Unwritable::ReadOnly) => write!(f, "Skipped (read-only)"),
            Self::SkippedUnwritable(Unwritable::AccessDenied) => {
                write!(f, "Skipped (access denied)")
            }
            Self::Error(_) => write!(f, "Error"),
        }
    }
}

/// Running totals for a whole run. Threaded through the per-file loop by value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub converted: usize,
    pub already_standard: usize,
    pub skipped_binary: usize,
    /// Read-only and access-denied files together.
    pub skipped_unwritable: usize,
    pub errors: usize,
}

impl Tally {
    #[must_use]
    pub fn record(mut self, outcome: &FileOutcome) -> Self {
        match outcome {
            FileOutcome::Converted => self.converted += 1,
            FileOutcome::AlreadyStandard => self.already_standard += 1,
            FileOutcome::SkippedBinary => self.skipped_binary += 1,
            FileOutcome::SkippedUnwritable(_) => self.skipped_unwritable += 1,
            FileOutcome::Error(_) => self.errors += 1,
        }
        self
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.converted
            + self.already_standard
            + self.skipped_binary
            + self.skipped_unwritable
            + self.errors
    }
}
