use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{Config, Error, Result};

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "iconsmith.toml";

/// Represents an iconsmith.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct IconsmithToml {
    path: PathBuf,
    content: String,
    config: Config,
    exists: bool,
}

impl IconsmithToml {
    /// Open and parse an iconsmith.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
            exists: true,
        })
    }

    /// Open an iconsmith.toml file, falling back to defaults when it does
    /// not exist. Any other failure is still an error.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Err(err) if is_not_found(&err) => Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
                exists: false,
            }),
            other => other,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the config was read from disk.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Resolve a configured path relative to the directory holding the file.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match self.path.parent() {
            Some(parent) if path.is_relative() => parent.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// The configured source directory, resolved.
    pub fn source_dir(&self) -> Option<PathBuf> {
        self.config.source.dir.as_deref().map(|dir| self.resolve(dir))
    }

    /// The configured output directory, resolved.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.config.output.dir.as_deref().map(|dir| self.resolve(dir))
    }
}

fn is_not_found(err: &Error) -> bool {
    matches!(err, Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
}
