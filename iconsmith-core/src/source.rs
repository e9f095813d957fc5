//! Scanned icon files and their derived component entries.

use std::path::{Path, PathBuf};

/// An SVG file discovered by a scan.
///
/// Identity is the absolute path. The relative path is always expressed with
/// `/` separators, whatever the host platform uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFile {
    absolute_path: PathBuf,
    relative_path: String,
}

impl SourceFile {
    /// Create a source file from an absolute path and a path relative to the
    /// scan root. Backslashes in the relative path are normalized to `/`.
    pub fn new(absolute_path: impl Into<PathBuf>, relative_path: impl AsRef<str>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            relative_path: relative_path.as_ref().replace('\\', "/"),
        }
    }

    /// Build a source file for `path` found under `root`.
    ///
    /// Returns `None` when `path` is not inside `root`.
    pub fn under_root(root: &Path, path: &Path) -> Option<Self> {
        let rel = path.strip_prefix(root).ok()?;
        let relative = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Some(Self {
            absolute_path: path.to_path_buf(),
            relative_path: relative,
        })
    }

    /// Get the absolute path.
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Get the `/`-separated path relative to the scan root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Directory part of the relative path, if the file is not at the root.
    pub fn relative_dir(&self) -> Option<&str> {
        self.relative_path
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .filter(|dir| !dir.is_empty())
    }
}

/// A source file joined with the component name derived for it.
///
/// Entries are transient: rebuild them whenever the naming configuration
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub source: SourceFile,
    pub component_name: String,
}

impl ComponentEntry {
    pub fn new(source: SourceFile, component_name: impl Into<String>) -> Self {
        Self {
            source,
            component_name: component_name.into(),
        }
    }

    /// Shortcut for `self.source.relative_path()`.
    pub fn relative_path(&self) -> &str {
        self.source.relative_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_separators() {
        let file = SourceFile::new("/icons/a/b.svg", "a\\b.svg");
        assert_eq!(file.relative_path(), "a/b.svg");
    }

    #[test]
    fn test_under_root() {
        let root = Path::new("/icons");
        let file = SourceFile::under_root(root, Path::new("/icons/nav/arrow.svg")).unwrap();
        assert_eq!(file.relative_path(), "nav/arrow.svg");
        assert_eq!(file.absolute_path(), Path::new("/icons/nav/arrow.svg"));

        assert!(SourceFile::under_root(root, Path::new("/other/arrow.svg")).is_none());
    }

    #[test]
    fn test_relative_dir() {
        assert_eq!(
            SourceFile::new("/x", "a/b/c.svg").relative_dir(),
            Some("a/b")
        );
        assert_eq!(SourceFile::new("/x", "c.svg").relative_dir(), None);
    }
}
