use std::path::PathBuf;

use crate::types::BomKind;

/// Every error srcnorm can produce. Per-file variants are folded into a
/// `FileOutcome` by the pipeline; the rest end the run.
#[derive(Debug)]
pub enum NormError {
    MissingArgument,
    DirectoryNotFound {
        path: PathBuf,
    },
    Walk {
        path: PathBuf,
        source: ignore::Error,
    },
    Pattern {
        pattern: String,
        reason: String,
    },
    PermissionDenied {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        encoding: BomKind,
        offset: usize,
    },
}

impl std::fmt::Display for NormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument => write!(f, "no folder path provided"),
            Self::DirectoryNotFound { path } => {
                write!(f, "the specified directory does not exist: {}", path.display())
            }
            Self::Walk { path, source } => {
                write!(f, "cannot enumerate {}: {source}", path.display())
            }
            Self::Pattern { pattern, reason } => {
                write!(f, "invalid file pattern \"{pattern}\": {reason}")
            }
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Decode {
                path,
                encoding: BomKind::None,
                offset,
            } => write!(
                f,
                "{}: invalid UTF-8 at byte {offset} (no BOM present)",
                path.display()
            ),
            Self::Decode {
                path,
                encoding,
                offset,
            } => write!(
                f,
                "{}: invalid {encoding} data at byte {offset}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for NormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Walk { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl NormError {
    /// Wrap an I/O failure, keeping permission problems distinguishable.
    pub(crate) fn from_io(path: &std::path::Path, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }

    /// Process exit code for errors that end the run: 2 for bad usage,
    /// 1 for a setup failure (enumeration, selection pattern). The per-file
    /// variants never end a run; they share 1 so every variant has a code.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument | Self::DirectoryNotFound { .. } => 2,
            Self::Walk { .. }
            | Self::Pattern { .. }
            | Self::PermissionDenied { .. }
            | Self::Io { .. }
            | Self::Decode { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn permission_denied_is_its_own_variant() {
        let err = NormError::from_io(
            Path::new("a.cpp"),
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert!(matches!(err, NormError::PermissionDenied { .. }));

        let err = NormError::from_io(Path::new("a.cpp"), io::Error::other("disk on fire"));
        assert!(matches!(err, NormError::Io { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn decode_message_names_offset() {
        let err = NormError::Decode {
            path: PathBuf::from("x.h"),
            encoding: BomKind::None,
            offset: 17,
        };
        let msg = err.to_string();
        assert!(msg.contains("x.h"), "{msg}");
        assert!(msg.contains("byte 17"), "{msg}");
    }

    #[test]
    fn setup_errors_exit_1() {
        let err = NormError::Pattern {
            pattern: "*.{".into(),
            reason: "unclosed alternate group".into(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("*.{"));
        let err = NormError::PermissionDenied {
            path: PathBuf::from("a.cpp"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn usage_errors_exit_2() {
        assert_eq!(NormError::MissingArgument.exit_code(), 2);
        let err = NormError::DirectoryNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
