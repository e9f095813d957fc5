//! List operation - scan a directory and show derived component names.

use std::path::Path;

use eyre::{Context, Result};
use iconsmith_core::{FileSetView, NamingConfig, scan};

use crate::reports::{ListReport, ListRow, collision_warnings};

/// Execute the list operation.
///
/// Scans `source`, applies the case-insensitive `filter` and reports every
/// visible file with its component name.
pub fn list(source: &Path, naming: NamingConfig, filter: &str) -> Result<ListReport> {
    let files = scan(source).wrap_err("Failed to scan source directory")?;

    let mut view = FileSetView::new(files, naming);
    view.set_search(filter);

    let rows = view
        .visible()
        .iter()
        .map(|entry| ListRow {
            relative_path: entry.relative_path().to_string(),
            component_name: entry.component_name.clone(),
        })
        .collect();

    Ok(ListReport {
        warnings: collision_warnings(&view.collisions()),
        search: view.search().to_string(),
        rows,
        total: view.total(),
    })
}
