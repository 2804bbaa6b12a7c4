//! Source file discovery for targets.
//!
//! A target's `files` entries are either literal paths or glob patterns.
//! Literal paths are kept even when they do not exist, so the missing file
//! is reported when it is read. Globs are expanded by walking the longest
//! literal directory prefix of the pattern.
//!
//! Glob semantics: `*` and `?` never cross a `/`; `**` does.

use crate::error::{Result, SpliceError};
use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Characters that make a `files` entry a glob.
const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

/// Resolve `patterns` relative to `base`.
///
/// Results follow pattern order; matches of a single glob are sorted.
/// A path produced by more than one entry is kept at its first position.
pub fn resolve_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = normalize_path(pattern.trim());
        let found = if is_glob(&pattern) {
            expand_glob(base, &pattern)?
        } else {
            vec![base.join(&pattern)]
        };

        if found.is_empty() {
            tracing::warn!(pattern = %pattern, "pattern matched no files");
        }

        for path in found {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    tracing::debug!(count = files.len(), "resolved source files");
    Ok(files)
}

/// Whether a `files` entry is a glob pattern.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_CHARS)
}

fn expand_glob(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile_glob(pattern)?;
    let prefix = literal_prefix(pattern);
    let root = base.join(&prefix);

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        let relative = normalize_path(&relative.to_string_lossy());
        let candidate = if prefix.is_empty() {
            relative
        } else {
            format!("{}/{}", prefix, relative)
        };

        tracing::trace!(candidate = %candidate, "checking path");
        if matcher.is_match(&candidate) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            SpliceError::UserError(format!("invalid glob pattern '{}': {}", pattern, e))
        })
}

/// The leading `/`-separated components of `pattern` that contain no glob
/// characters, e.g. `src/pages` for `src/pages/**/*.html`.
fn literal_prefix(pattern: &str) -> String {
    let mut components: Vec<&str> = pattern.split('/').collect();
    // The last component is a file name pattern, never a directory to walk from.
    components.pop();

    components
        .into_iter()
        .take_while(|component| !is_glob(component))
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(base: &Path, relative: &str) {
        let path = base.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    fn names(base: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| normalize_path(&p.strip_prefix(base).unwrap().to_string_lossy()))
            .collect()
    }

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_literal_paths_kept_in_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.html");

        let files = resolve_files(dir.path(), &patterns(&["b.html", "missing.html"])).unwrap();
        assert_eq!(names(dir.path(), &files), vec!["b.html", "missing.html"]);
    }

    #[test]
    fn test_star_does_not_cross_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/index.html");
        touch(dir.path(), "src/about.html");
        touch(dir.path(), "src/nested/deep.html");
        touch(dir.path(), "src/style.css");

        let files = resolve_files(dir.path(), &patterns(&["src/*.html"])).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["src/about.html", "src/index.html"]
        );
    }

    #[test]
    fn test_double_star_recurses() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/index.html");
        touch(dir.path(), "src/nested/deep.html");
        touch(dir.path(), "other/skip.html");

        let files = resolve_files(dir.path(), &patterns(&["src/**/*.html"])).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["src/index.html", "src/nested/deep.html"]
        );
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/a.html");
        touch(dir.path(), "src/b.html");

        let files =
            resolve_files(dir.path(), &patterns(&["src/b.html", "src/*.html"])).unwrap();
        assert_eq!(names(dir.path(), &files), vec!["src/b.html", "src/a.html"]);
    }

    #[test]
    fn test_glob_under_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = resolve_files(dir.path(), &patterns(&["nope/*.html"])).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_glob_is_user_error() {
        let dir = TempDir::new().unwrap();
        match resolve_files(dir.path(), &patterns(&["src/[.html"])) {
            Err(SpliceError::UserError(msg)) => assert!(msg.contains("invalid glob pattern")),
            other => panic!("expected UserError, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("src/pages/**/*.html"), "src/pages");
        assert_eq!(literal_prefix("*.html"), "");
        assert_eq!(literal_prefix("src/*/index.html"), "src");
        assert_eq!(literal_prefix("a/b/c.html"), "a/b");
    }

    #[test]
    fn test_is_glob() {
        assert!(is_glob("*.html"));
        assert!(is_glob("page?.html"));
        assert!(is_glob("{a,b}.html"));
        assert!(!is_glob("src/index.html"));
    }
}
