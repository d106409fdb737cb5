use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::{DirEntry, WalkBuilder};

use crate::error::NormError;

/// Source extensions that get standardized. Matched case-insensitively.
pub const EXTENSIONS: &[&str] = &["h", "hpp", "cpp", "cc", "cxx", "cs"];

// Generated output, caches and VCS/IDE state. A directory with one of these
// names (any case) is never descended into.
pub const SKIP_DIRS: &[&str] = &[
    "Intermediate",
    "Binaries",
    "Saved",
    "DerivedDataCache",
    ".git",
    ".vs",
];

/// Every selected file under `root`, in a stable order (sorted by name at each level).
///
/// Sequential walk with every ignore-file mechanism off: .gitignore'd sources
/// still need standardizing. Any walk error aborts.
///
/// `SKIP_DIRS` only prunes directories below `root`. A root that itself lives
/// under `Saved/` (or any other skipped name) is still walked, unlike the
/// full-path marker match of the C# converter this replaces.
/// Symlinks are not followed, so a symlinked source file is not selected.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, NormError> {
    let matcher = source_matcher()?;

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .sort_by_file_name(Ord::cmp)
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| NormError::Walk {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if matcher.is_match(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn source_matcher() -> Result<GlobMatcher, NormError> {
    let pattern = format!("*.{{{}}}", EXTENSIONS.join(","));
    GlobBuilder::new(&pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| NormError::Pattern {
            pattern,
            reason: e.to_string(),
        })
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| SKIP_DIRS.iter().any(|d| d.eq_ignore_ascii_case(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn names(root: &Path) -> Vec<String> {
        discover(root)
            .unwrap()
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn selects_by_extension_any_case() {
        let dir = tempfile::tempdir().unwrap();
        for f in ["a.cpp", "b.H", "c.Hpp", "d.cc", "e.cxx", "f.cs", "g.txt", "h.c", "Makefile"] {
            touch(dir.path(), f);
        }
        assert_eq!(
            names(dir.path()),
            ["a.cpp", "b.H", "c.Hpp", "d.cc", "e.cxx", "f.cs"]
        );
    }

    #[test]
    fn prunes_generated_and_vcs_dirs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Source/Game.cpp");
        touch(dir.path(), "Intermediate/Build/Gen.cpp");
        touch(dir.path(), "binaries/Win64/x.h");
        touch(dir.path(), ".git/hooks/y.cs");
        touch(dir.path(), ".vs/z.cpp");
        touch(dir.path(), "Plugins/Saved/w.cpp");
        touch(dir.path(), "SavedGames/kept.cpp");
        assert_eq!(names(dir.path()), ["SavedGames/kept.cpp", "Source/Game.cpp"]);
    }

    #[test]
    fn gitignored_and_hidden_files_included() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.cpp\n").unwrap();
        touch(dir.path(), "a.cpp");
        touch(dir.path(), ".hidden/b.h");
        assert_eq!(names(dir.path()), [".hidden/b.h", "a.cpp"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_sources_not_selected() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "real.txt");
        touch(dir.path(), "real.cpp");
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.cpp"))
            .unwrap();
        assert_eq!(names(dir.path()), ["real.cpp"]);
    }

    #[test]
    fn root_named_like_skip_dir_still_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Saved");
        touch(&root, "a.cpp");
        assert_eq!(names(&root), ["a.cpp"]);
    }
}
