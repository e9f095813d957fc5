//! Component name derivation.

use crate::{ComponentEntry, Framework, SourceFile};

/// Naming and framework settings shared by derivation and rendering.
///
/// Passed explicitly to every call that needs it; there is no ambient copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub prefix: String,
    pub suffix: String,
    pub framework: Framework,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: "Component".to_string(),
            framework: Framework::default(),
        }
    }
}

impl NamingConfig {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, framework: Framework) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            framework,
        }
    }

    /// Derive the component name for a relative path.
    pub fn component_name(&self, relative_path: &str) -> String {
        derive_name(relative_path, &self.prefix, &self.suffix)
    }

    /// Join a source file with its derived name.
    pub fn entry(&self, source: &SourceFile) -> ComponentEntry {
        ComponentEntry::new(source.clone(), self.component_name(source.relative_path()))
    }
}

/// Derive a component identifier from a relative path.
///
/// The directory hierarchy is flattened into the name: every segment is split
/// into ASCII-alphanumeric words, each word gets an uppercase first letter,
/// and the words are concatenated between `prefix` and `suffix`.
///
/// ```
/// use iconsmith_core::derive_name;
///
/// assert_eq!(
///     derive_name("Icons/Sub Folder/my_icon.svg", "App", "Icon"),
///     "AppIconsSubFolderMyIconIcon"
/// );
/// ```
pub fn derive_name(relative_path: &str, prefix: &str, suffix: &str) -> String {
    let stem = strip_extension(relative_path);

    let body: String = stem
        .split(['/', '\\'])
        .flat_map(|segment| segment.split(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    format!("{prefix}{body}{suffix}")
}

/// Remove the extension of the last path segment. Leading dots belong to the
/// file name, so `.hidden` has no extension.
fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &path[name_start..];
    let dots = name.len() - name.trim_start_matches('.').len();

    match name[dots..].rfind('.') {
        Some(i) => &path[..name_start + dots + i],
        None => path,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
