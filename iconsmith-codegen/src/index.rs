//! The `index.js` export manifest.

use std::path::{Path, PathBuf};

use iconsmith_core::{Framework, GeneratedFile, Stamp};

use crate::{builder::CodeBuilder, error::IndexError};

/// File name of the manifest, whatever the framework.
pub const INDEX_FILE_NAME: &str = "index.js";

/// One `export { default as Name } from './path';` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    pub component_name: String,
    /// `/`-separated path relative to the destination root, without
    /// extension.
    pub import_path: String,
}

/// Ordered export lines for the components of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexManifest {
    framework: Framework,
    exports: Vec<ExportLine>,
}

impl IndexManifest {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            exports: Vec::new(),
        }
    }

    /// Append an export, keeping processing order.
    pub fn push(&mut self, component_name: impl Into<String>, import_path: impl Into<String>) {
        self.exports.push(ExportLine {
            component_name: component_name.into(),
            import_path: import_path.into(),
        });
    }

    /// Render every export statement, in order.
    pub fn export_statements(&self) -> Vec<String> {
        let extension = self.framework.import_extension().unwrap_or("");
        self.exports
            .iter()
            .map(|line| {
                format!(
                    "export {{ default as {} }} from './{}{}';",
                    line.component_name, line.import_path, extension
                )
            })
            .collect()
    }

    /// Render the complete manifest file.
    pub fn render(&self, stamp: Stamp) -> String {
        let generated_on = format!("Generated on {}", stamp.datetime());

        CodeBuilder::javascript()
            .jsdoc_block([
                "Auto-generated index file for SVG icon components",
                generated_on.as_str(),
            ])
            .blank()
            .each(self.export_statements(), |b, statement| b.line(&statement))
            .build()
    }
}

/// The manifest as a file under the destination root.
struct IndexFile<'a> {
    manifest: &'a IndexManifest,
    stamp: Stamp,
}

impl GeneratedFile for IndexFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INDEX_FILE_NAME)
    }

    fn render(&self) -> String {
        self.manifest.render(self.stamp)
    }
}

/// Writes the manifest for a batch in a single atomic write.
#[derive(Debug, Clone)]
pub struct IndexWriter {
    dest_root: PathBuf,
    stamp: Stamp,
}

impl IndexWriter {
    pub fn new(dest_root: impl Into<PathBuf>) -> Self {
        Self {
            dest_root: dest_root.into(),
            stamp: Stamp::now(),
        }
    }

    /// Use a fixed timestamp for the header.
    pub fn stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = stamp;
        self
    }

    /// Path the manifest is written to.
    pub fn path(&self) -> PathBuf {
        self.dest_root.join(INDEX_FILE_NAME)
    }

    /// Write `index.js`, replacing any previous manifest.
    pub fn write(&self, manifest: &IndexManifest) -> Result<PathBuf, IndexError> {
        let file = IndexFile {
            manifest,
            stamp: self.stamp,
        };

        let path = file.write(&self.dest_root).map_err(|source| IndexError::Write {
            path: self.path(),
            source,
        })?;

        log::debug!(
            "wrote {} with {} exports",
            path.display(),
            manifest.exports.len()
        );
        Ok(path)
    }
}
