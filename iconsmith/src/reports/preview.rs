//! Preview command report data structures.

use iconsmith_core::Framework;

use super::output::{Output, Report};

/// Report data from rendering a single component.
#[derive(Debug)]
pub struct PreviewReport {
    /// Relative path of the source icon.
    pub relative_path: String,
    /// Derived component name.
    pub component_name: String,
    /// Framework the component was rendered for.
    pub framework: Framework,
    /// Rendered component source.
    pub content: String,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.divider(&format!(
            "{}.{} ({})",
            self.component_name,
            self.framework.file_extension(),
            self.relative_path
        ));
        out.preformatted(&self.content);
    }
}
