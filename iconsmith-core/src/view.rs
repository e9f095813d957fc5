//! The filterable projection of scanned files joined with derived names.

use indexmap::IndexMap;

use crate::{ComponentEntry, NamingConfig, SourceFile};

/// Keep the entries whose relative path contains `search`, ignoring case.
///
/// A blank search keeps every entry. Order is preserved.
pub fn filter_entries(entries: &[ComponentEntry], search: &str) -> Vec<ComponentEntry> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.relative_path().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Several source files that flatten to the same component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub component_name: String,
    /// Relative paths in scan order.
    pub relative_paths: Vec<String>,
}

/// Scanned files, the naming configuration and a search string, with the
/// joined entries kept up to date.
///
/// Every setter recomputes the projection; the view never changes behind the
/// caller's back.
#[derive(Debug, Default)]
pub struct FileSetView {
    files: Vec<SourceFile>,
    naming: NamingConfig,
    search: String,
    entries: Vec<ComponentEntry>,
    visible: Vec<ComponentEntry>,
}

impl FileSetView {
    pub fn new(files: Vec<SourceFile>, naming: NamingConfig) -> Self {
        let mut view = Self {
            files,
            naming,
            ..Self::default()
        };
        view.recompute();
        view
    }

    /// Replace the scanned file set wholesale.
    pub fn set_files(&mut self, files: Vec<SourceFile>) {
        self.files = files;
        self.recompute();
    }

    pub fn set_naming(&mut self, naming: NamingConfig) {
        self.naming = naming;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.visible = filter_entries(&self.entries, &self.search);
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Every scanned file with its derived name, in scan order.
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    /// The entries matching the current search.
    pub fn visible(&self) -> &[ComponentEntry] {
        &self.visible
    }

    /// Number of scanned files.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// Look up an entry by its relative path (`/` or `\` separated).
    pub fn find(&self, relative_path: &str) -> Option<&ComponentEntry> {
        let wanted = relative_path.replace('\\', "/");
        self.entries.iter().find(|e| e.relative_path() == wanted)
    }

    /// Groups of visible entries whose component names differ at most in
    /// ASCII case. Each group is named after its first entry.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut by_name: IndexMap<String, Collision> = IndexMap::new();
        for entry in &self.visible {
            by_name
                .entry(entry.component_name.to_ascii_lowercase())
                .or_insert_with(|| Collision {
                    component_name: entry.component_name.clone(),
                    relative_paths: Vec::new(),
                })
                .relative_paths
                .push(entry.relative_path().to_string());
        }

        by_name
            .into_values()
            .filter(|collision| collision.relative_paths.len() > 1)
            .collect()
    }

    fn recompute(&mut self) {
        self.entries = self.files.iter().map(|f| self.naming.entry(f)).collect();
        self.visible = filter_entries(&self.entries, &self.search);
    }
}
