use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::{Builder, NamedTempFile};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any existing file, and return the
    /// path that was written
    fn write(&self, base: &Path) -> io::Result<PathBuf> {
        let path = self.path(base);
        write_atomic(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The content goes to a temporary file in the target directory which is then
/// renamed over `path`. The parent directory must already exist. An existing
/// file keeps its permissions; a new one gets the same mode a plain
/// `fs::write` would give it.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_file_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Temp files default to 0600; ask for 0666 so the umask decides instead.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
