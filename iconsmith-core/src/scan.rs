//! Recursive discovery of SVG files under a source root.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::SourceFile;

/// The source root could not be scanned.
#[derive(Debug, Error)]
#[error("cannot scan '{}': {cause}", .path.display())]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub cause: ScanCause,
}

/// Why a scan root was rejected.
#[derive(Debug, Error)]
pub enum ScanCause {
    #[error("directory does not exist")]
    NotFound,

    #[error("not a directory")]
    NotADirectory,

    #[error("failed to read directory")]
    Io(#[source] io::Error),
}

/// Scan `root` for SVG files.
///
/// Recurses without a depth limit and does not follow symlinks. Files whose
/// name starts with `.` are skipped; hidden directories are still walked.
/// The extension match is case-insensitive. Entries that cannot be read
/// are skipped; only an invalid root is an error.
///
/// Results come in a stable depth-first order with siblings sorted by name.
pub fn scan(root: &Path) -> Result<Vec<SourceFile>, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|e| ScanError {
        path: root.to_path_buf(),
        cause: match e.kind() {
            io::ErrorKind::NotFound => ScanCause::NotFound,
            _ => ScanCause::Io(e),
        },
    })?;

    if !metadata.is_dir() {
        return Err(ScanError {
            path: root.to_path_buf(),
            cause: ScanCause::NotADirectory,
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() || is_hidden(&entry) || !has_svg_extension(entry.path())
        {
            continue;
        }

        match SourceFile::under_root(root, entry.path()) {
            Some(file) => files.push(file),
            None => log::debug!("skipping '{}': outside scan root", entry.path().display()),
        }
    }

    log::debug!("found {} svg files in '{}'", files.len(), root.display());
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
