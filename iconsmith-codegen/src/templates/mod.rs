//! Framework-specific component templates.
//!
//! Both templates bake in the same defaults: `size` 24, `strokeWidth` 1.5,
//! `filled` false and an empty class.

mod react;
mod vue;

use iconsmith_core::{Framework, Stamp, SvgContent};
pub use react::ReactTemplate;
pub use vue::VueTemplate;

/// Default `size` prop value.
pub const DEFAULT_SIZE: u32 = 24;
/// Default `strokeWidth` prop value.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;

/// Everything a template needs to render one component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentSource<'a> {
    pub view_box: &'a str,
    pub inner_markup: &'a str,
    pub relative_path: &'a str,
    pub component_name: &'a str,
    pub stamp: Stamp,
}

impl<'a> ComponentSource<'a> {
    /// Pair extracted SVG content with the naming details of its entry.
    pub fn new(
        content: &'a SvgContent,
        relative_path: &'a str,
        component_name: &'a str,
        stamp: Stamp,
    ) -> Self {
        Self {
            view_box: &content.view_box,
            inner_markup: &content.inner_markup,
            relative_path,
            component_name,
            stamp,
        }
    }

    /// Lines of the doc comment placed above every component.
    fn doc_lines(&self) -> [String; 3] {
        [
            self.component_name.to_string(),
            format!("Generated from: {}", self.relative_path),
            format!("Date: {}", self.stamp.date()),
        ]
    }
}

/// A component template for one framework.
///
/// Implementations must embed the view box literally and the inner markup
/// verbatim.
pub trait ComponentTemplate {
    /// Framework this template targets.
    fn framework(&self) -> Framework;

    /// Render the component source text.
    fn render(&self, source: &ComponentSource<'_>) -> String;
}

/// Get the template for a framework.
pub fn template_for(framework: Framework) -> &'static dyn ComponentTemplate {
    match framework {
        Framework::Vue => &VueTemplate,
        Framework::React => &ReactTemplate,
    }
}

/// Render one component for `framework`.
pub fn render(framework: Framework, source: &ComponentSource<'_>) -> String {
    template_for(framework).render(source)
}

#[cfg(test)]
mod tests {
    use iconsmith_core::extract;

    use super::*;

    fn source<'a>(content: &'a SvgContent) -> ComponentSource<'a> {
        ComponentSource::new(
            content,
            "nav/arrow.svg",
            "NavArrowComponent",
            Stamp::on(2024, 1, 2).unwrap(),
        )
    }

    #[test]
    fn test_template_for() {
        assert_eq!(template_for(Framework::Vue).framework(), Framework::Vue);
        assert_eq!(template_for(Framework::React).framework(), Framework::React);
    }

    #[test]
    fn test_both_templates_embed_content_verbatim() {
        let content = extract(
            "<svg viewBox=\"0 0 20 20\">\n  <path d=\"M1 1h18\"/>\n  <circle cx=\"10\" cy=\"10\" r=\"2\"/>\n</svg>",
        );

        for framework in [Framework::Vue, Framework::React] {
            let rendered = render(framework, &source(&content));
            assert!(rendered.contains(&content.inner_markup), "{framework}");
            assert!(rendered.contains("viewBox=\"0 0 20 20\""), "{framework}");
            assert!(rendered.contains("Generated from: nav/arrow.svg"), "{framework}");
            assert!(rendered.contains("Date: 2024-01-02"), "{framework}");
        }
    }

    #[test]
    fn test_view_box_is_not_escaped() {
        let content = extract(r#"<svg viewBox="-1.5 -1.5 27 27"><path/></svg>"#);
        let rendered = render(Framework::React, &source(&content));
        assert!(rendered.contains(r#"viewBox="-1.5 -1.5 27 27""#));
    }

    #[test]
    fn test_rendering_is_pure() {
        let content = extract("<svg><rect/></svg>");
        let first = render(Framework::Vue, &source(&content));
        assert_eq!(render(Framework::Vue, &source(&content)), first);
    }
}
