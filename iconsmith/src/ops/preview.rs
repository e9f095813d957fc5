//! Preview operation - render one component without writing it.

use std::path::Path;

use eyre::{Context, Result, eyre};
use iconsmith_codegen::render_preview;
use iconsmith_core::{FileSetView, NamingConfig, scan};

use crate::reports::PreviewReport;

/// Execute the preview operation.
pub fn preview(source: &Path, relative_path: &str, naming: NamingConfig) -> Result<PreviewReport> {
    let framework = naming.framework;
    let files = scan(source).wrap_err("Failed to scan source directory")?;
    let view = FileSetView::new(files, naming);

    let entry = view.find(relative_path).ok_or_else(|| {
        eyre!(
            "no SVG file '{}' under '{}'",
            relative_path,
            source.display()
        )
    })?;

    let content = render_preview(&entry.source, &entry.component_name, framework)
        .wrap_err_with(|| format!("Failed to render '{}'", relative_path))?;

    Ok(PreviewReport {
        relative_path: entry.relative_path().to_string(),
        component_name: entry.component_name.clone(),
        framework,
        content,
    })
}
