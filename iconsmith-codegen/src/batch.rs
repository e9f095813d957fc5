//! Batch generation of component files.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use iconsmith_core::{ComponentEntry, Framework, GeneratedFile, SourceFile, Stamp, extract};

use crate::{
    error::{EntryError, GenerateError},
    index::{INDEX_FILE_NAME, IndexManifest},
    templates::{ComponentSource, render},
};

/// Progress after one entry of a batch has been processed.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Entries processed so far, including this one.
    pub processed: usize,
    /// Entries in the batch.
    pub total: usize,
    pub entry: &'a ComponentEntry,
    pub succeeded: bool,
}

/// A component that was written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedComponent {
    pub entry: ComponentEntry,
    pub output_path: PathBuf,
    /// `/`-separated path relative to the destination root, without
    /// extension.
    pub import_path: String,
}

/// An entry that could not be generated.
#[derive(Debug)]
pub struct FailedEntry {
    pub entry: ComponentEntry,
    pub error: EntryError,
}

impl FailedEntry {
    pub fn reason(&self) -> String {
        self.error.reason()
    }
}

/// Outcome of a batch: every selected entry ends up in exactly one list.
#[derive(Debug)]
pub struct GenerationResult {
    framework: Framework,
    pub succeeded: Vec<GeneratedComponent>,
    pub failed: Vec<FailedEntry>,
}

impl GenerationResult {
    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// The export manifest for the components written by this batch, in
    /// processing order.
    pub fn index_manifest(&self) -> IndexManifest {
        let mut manifest = IndexManifest::new(self.framework);
        for component in &self.succeeded {
            manifest.push(&component.entry.component_name, &component.import_path);
        }
        manifest
    }
}

/// A file that would be generated, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the destination root
    pub path: String,
    pub content: String,
}

/// Outcome of a dry run: what would be written and which entries would fail.
#[derive(Debug)]
pub struct BatchPreview {
    /// Component files in processing order, index last.
    pub files: Vec<PreviewFile>,
    pub failed: Vec<FailedEntry>,
}

impl BatchPreview {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Component names already taken in a batch, mapped to the relative path that
/// took them. Names are compared ignoring ASCII case so that two components
/// never share a file on a case-insensitive filesystem.
#[derive(Debug, Default)]
struct ClaimedNames(HashMap<String, String>);

impl ClaimedNames {
    fn check(&self, entry: &ComponentEntry) -> Result<(), EntryError> {
        match self.0.get(&entry.component_name.to_ascii_lowercase()) {
            Some(first) => Err(EntryError::Collision {
                name: entry.component_name.clone(),
                first: first.clone(),
            }),
            None => Ok(()),
        }
    }

    fn claim(&mut self, entry: &ComponentEntry) {
        self.0.insert(
            entry.component_name.to_ascii_lowercase(),
            entry.relative_path().to_string(),
        );
    }
}

/// A rendered component bound to its output location.
struct ComponentFile {
    dir: PathBuf,
    file_name: String,
    content: String,
}

impl GeneratedFile for ComponentFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(&self.file_name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Generates component files for a selection of entries.
///
/// Entries are processed one at a time, in order. A failing entry is recorded
/// and the batch moves on.
#[derive(Debug, Clone)]
pub struct BatchGenerator {
    dest_root: PathBuf,
    framework: Framework,
    preserve_structure: bool,
    stamp: Stamp,
}

impl BatchGenerator {
    pub fn new(dest_root: impl Into<PathBuf>, framework: Framework) -> Self {
        Self {
            dest_root: dest_root.into(),
            framework,
            preserve_structure: false,
            stamp: Stamp::now(),
        }
    }

    /// Mirror the source directory layout under the destination root.
    pub fn preserve_structure(mut self, preserve: bool) -> Self {
        self.preserve_structure = preserve;
        self
    }

    /// Use a fixed timestamp for generated doc comments.
    pub fn stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = stamp;
        self
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// Generate every entry, calling `on_progress` after each one.
    ///
    /// Fails up front only when the destination root is not an existing
    /// directory. A later entry whose component name was already generated in
    /// this batch, ignoring case, is failed instead of overwriting the earlier
    /// file.
    pub fn generate<F>(
        &self,
        entries: &[ComponentEntry],
        mut on_progress: F,
    ) -> Result<GenerationResult, GenerateError>
    where
        F: FnMut(Progress<'_>),
    {
        if !self.dest_root.is_dir() {
            return Err(GenerateError::InvalidDestination {
                path: self.dest_root.clone(),
            });
        }

        let mut result = GenerationResult {
            framework: self.framework,
            succeeded: Vec::new(),
            failed: Vec::new(),
        };
        let mut claimed = ClaimedNames::default();

        for (i, entry) in entries.iter().enumerate() {
            let outcome = claimed
                .check(entry)
                .and_then(|()| self.generate_entry(entry));

            let succeeded = outcome.is_ok();
            match outcome {
                Ok(component) => {
                    log::debug!("generated {}", component.output_path.display());
                    claimed.claim(entry);
                    result.succeeded.push(component);
                }
                Err(error) => {
                    log::warn!("error processing {}: {}", entry.relative_path(), error.reason());
                    result.failed.push(FailedEntry {
                        entry: entry.clone(),
                        error,
                    });
                }
            }

            on_progress(Progress {
                processed: i + 1,
                total: entries.len(),
                entry,
                succeeded,
            });
        }

        Ok(result)
    }

    /// Render every entry and the index without touching the filesystem
    /// beyond reading sources.
    ///
    /// Applies the same rules as [`generate`](Self::generate): unreadable
    /// entries and name collisions end up in `failed` and are left out of
    /// the files and the index.
    pub fn preview(&self, entries: &[ComponentEntry]) -> BatchPreview {
        let mut preview = BatchPreview {
            files: Vec::new(),
            failed: Vec::new(),
        };
        let mut manifest = IndexManifest::new(self.framework);
        let mut claimed = ClaimedNames::default();

        for entry in entries {
            let raw = match claimed
                .check(entry)
                .and_then(|()| read_source(&entry.source))
            {
                Ok(raw) => raw,
                Err(error) => {
                    log::warn!("error processing {}: {}", entry.relative_path(), error.reason());
                    preview.failed.push(FailedEntry {
                        entry: entry.clone(),
                        error,
                    });
                    continue;
                }
            };

            let import_path = self.import_path(entry);
            preview.files.push(PreviewFile {
                path: format!("{}.{}", import_path, self.framework.file_extension()),
                content: self.render_entry(entry, &raw),
            });
            manifest.push(&entry.component_name, import_path);
            claimed.claim(entry);
        }

        preview.files.push(PreviewFile {
            path: INDEX_FILE_NAME.to_string(),
            content: manifest.render(self.stamp),
        });
        preview
    }

    fn generate_entry(&self, entry: &ComponentEntry) -> Result<GeneratedComponent, EntryError> {
        let raw = read_source(&entry.source)?;

        let subdir = self.output_subdir(entry);
        let dir = match subdir {
            Some(sub) => {
                let dir = self.dest_root.join(sub);
                std::fs::create_dir_all(&dir).map_err(|source| EntryError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
                log::debug!("created subdirectory: {}", sub);
                PathBuf::from(sub)
            }
            None => PathBuf::new(),
        };

        let file = ComponentFile {
            file_name: format!(
                "{}.{}",
                entry.component_name,
                self.framework.file_extension()
            ),
            content: self.render_entry(entry, &raw),
            dir,
        };

        let output_path = file
            .write(&self.dest_root)
            .map_err(|source| EntryError::Write {
                path: file.path(&self.dest_root),
                source,
            })?;

        Ok(GeneratedComponent {
            entry: entry.clone(),
            output_path,
            import_path: self.import_path(entry),
        })
    }

    fn render_entry(&self, entry: &ComponentEntry, raw: &str) -> String {
        render_component(
            self.framework,
            raw,
            entry.relative_path(),
            &entry.component_name,
            self.stamp,
        )
    }

    fn output_subdir<'e>(&self, entry: &'e ComponentEntry) -> Option<&'e str> {
        if self.preserve_structure {
            entry.source.relative_dir()
        } else {
            None
        }
    }

    fn import_path(&self, entry: &ComponentEntry) -> String {
        match self.output_subdir(entry) {
            Some(sub) => format!("{}/{}", sub, entry.component_name),
            None => entry.component_name.clone(),
        }
    }
}

/// Render one source file as a component without writing anything.
pub fn render_preview(
    source: &SourceFile,
    component_name: &str,
    framework: Framework,
) -> Result<String, EntryError> {
    let raw = read_source(source)?;
    Ok(render_component(
        framework,
        &raw,
        source.relative_path(),
        component_name,
        Stamp::now(),
    ))
}

fn read_source(source: &SourceFile) -> Result<String, EntryError> {
    std::fs::read_to_string(source.absolute_path()).map_err(|e| EntryError::Read {
        path: source.absolute_path().to_path_buf(),
        source: e,
    })
}

fn render_component(
    framework: Framework,
    raw: &str,
    relative_path: &str,
    component_name: &str,
    stamp: Stamp,
) -> String {
    let content = extract(raw);
    for fallback in content.fallbacks() {
        log::info!("{}: {}", relative_path, fallback.describe());
    }

    render(
        framework,
        &ComponentSource::new(&content, relative_path, component_name, stamp),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use iconsmith_core::NamingConfig;
    use tempfile::TempDir;

    use super::*;

    fn entry(root: &Path, rel: &str, body: &str) -> ComponentEntry {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        NamingConfig::default().entry(&SourceFile::new(path, rel))
    }

    #[test]
    fn test_import_path_flat_and_preserved() {
        let src = TempDir::new().unwrap();
        let e = entry(src.path(), "a/b/c.svg", "<svg/>");

        let flat = BatchGenerator::new("/out", Framework::Vue);
        let nested = flat.clone().preserve_structure(true);

        assert_eq!(flat.import_path(&e), "ABCComponent");
        assert_eq!(nested.import_path(&e), "a/b/ABCComponent");
    }

    #[test]
    fn test_invalid_destination() {
        let temp = TempDir::new().unwrap();
        let generator = BatchGenerator::new(temp.path().join("missing"), Framework::Vue);

        let err = generator.generate(&[], |_| {}).unwrap_err();

        assert!(matches!(err, GenerateError::InvalidDestination { .. }));
    }

    #[test]
    fn test_progress_is_reported_per_entry() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let entries = vec![
            entry(src.path(), "a.svg", "<svg><a/></svg>"),
            entry(src.path(), "b.svg", "<svg><b/></svg>"),
        ];

        let mut seen = Vec::new();
        BatchGenerator::new(out.path(), Framework::React)
            .generate(&entries, |p| seen.push((p.processed, p.total, p.succeeded)))
            .unwrap();

        assert_eq!(seen, vec![(1, 2, true), (2, 2, true)]);
    }

    #[test]
    fn test_preview_writes_nothing() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let entries = vec![entry(src.path(), "x/y.svg", "<svg><y/></svg>")];

        let preview = BatchGenerator::new(out.path(), Framework::React)
            .preserve_structure(true)
            .preview(&entries);

        assert!(preview.is_success());
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["x/XYComponent.jsx", "index.js"]);
        assert!(preview.files[1].content.contains("from './x/XYComponent';"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_preview_applies_collision_policy() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let entries = vec![
            entry(src.path(), "a/b.svg", "<svg><b/></svg>"),
            entry(src.path(), "a-b.svg", "<svg><ab/></svg>"),
        ];

        let preview = BatchGenerator::new(out.path(), Framework::Vue).preview(&entries);

        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["ABComponent.vue", "index.js"]);
        assert_eq!(
            preview.files[1]
                .content
                .matches("export { default as ABComponent }")
                .count(),
            1
        );

        assert_eq!(preview.failed.len(), 1);
        assert_eq!(preview.failed[0].entry.relative_path(), "a-b.svg");
        assert!(matches!(
            &preview.failed[0].error,
            EntryError::Collision { first, .. } if first == "a/b.svg"
        ));
    }

    #[test]
    fn test_preview_reports_unreadable_entries() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let entries = vec![
            entry(src.path(), "gone.svg", "<svg/>"),
            entry(src.path(), "kept.svg", "<svg><k/></svg>"),
        ];
        fs::remove_file(src.path().join("gone.svg")).unwrap();

        let preview = BatchGenerator::new(out.path(), Framework::Vue).preview(&entries);

        assert!(!preview.is_success());
        assert!(matches!(preview.failed[0].error, EntryError::Read { .. }));
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["KeptComponent.vue", "index.js"]);
    }

    #[test]
    fn test_names_differing_in_case_collide() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let entries = vec![
            entry(src.path(), "aB.svg", "<svg><upper/></svg>"),
            entry(src.path(), "ab.svg", "<svg><lower/></svg>"),
        ];
        assert_eq!(entries[0].component_name, "ABComponent");
        assert_eq!(entries[1].component_name, "AbComponent");

        let result = BatchGenerator::new(out.path(), Framework::Vue)
            .generate(&entries, |_| {})
            .unwrap();

        assert_eq!(result.succeeded.len(), 1);
        assert_eq!(result.succeeded[0].entry.relative_path(), "aB.svg");
        match &result.failed[0].error {
            EntryError::Collision { name, first } => {
                assert_eq!(name, "AbComponent");
                assert_eq!(first, "aB.svg");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_render_preview() {
        let src = TempDir::new().unwrap();
        let e = entry(src.path(), "star.svg", r#"<svg viewBox="0 0 10 10"><path d="M5 0"/></svg>"#);

        let rendered = render_preview(&e.source, &e.component_name, Framework::Vue).unwrap();

        assert!(rendered.contains("name: 'StarComponent',"));
        assert!(rendered.contains(r#"<path d="M5 0"/>"#));
    }

    #[test]
    fn test_render_preview_missing_file() {
        let source = SourceFile::new("/definitely/not/here.svg", "here.svg");
        let err = render_preview(&source, "Here", Framework::React).unwrap_err();
        assert!(matches!(err, EntryError::Read { .. }));
    }
}
