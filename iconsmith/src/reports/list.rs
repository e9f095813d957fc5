//! List command report data structures.

use iconsmith_core::Collision;

use super::output::{Output, Report};

/// Report data from listing a source directory.
#[derive(Debug)]
pub struct ListReport {
    /// Name collision warnings.
    pub warnings: Vec<String>,
    /// Search text that was applied.
    pub search: String,
    /// Visible files with their component names.
    pub rows: Vec<ListRow>,
    /// Number of scanned files before filtering.
    pub total: usize,
}

/// One listed file.
#[derive(Debug)]
pub struct ListRow {
    pub relative_path: String,
    pub component_name: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.total == 0 {
            out.preformatted("No SVG files found.");
            return;
        }

        if self.rows.is_empty() {
            out.preformatted(&format!("No SVG files match '{}'.", self.search.trim()));
        } else {
            for row in &self.rows {
                out.mapping(&row.relative_path, &row.component_name);
            }
        }

        out.newline();
        out.preformatted(&format!(
            "Displaying {} of {} SVG files",
            self.rows.len(),
            self.total
        ));
    }
}

/// One warning line per group of files that share a component name.
pub fn collision_warnings(collisions: &[Collision]) -> Vec<String> {
    collisions
        .iter()
        .map(|c| {
            format!(
                "{} is derived from {}; only the first will be generated",
                c.component_name,
                c.relative_paths
                    .iter()
                    .map(|p| format!("'{}'", p))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect()
}
