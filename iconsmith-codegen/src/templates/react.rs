//! React function component template (JSX).

use iconsmith_core::Framework;

use super::{ComponentSource, ComponentTemplate, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use crate::builder::CodeBuilder;

/// Renders a `.jsx` module exporting an arrow-function component.
///
/// Attributes use React's camelCase names; any extra props are spread onto
/// the `<svg>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactTemplate;

impl ComponentTemplate for ReactTemplate {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn render(&self, source: &ComponentSource<'_>) -> String {
        let doc = source.doc_lines();
        let name = source.component_name;

        CodeBuilder::javascript()
            .line("import React from 'react';")
            .blank()
            .jsdoc_block(doc.iter().map(String::as_str))
            .line(&format!("const {} = ({{", name))
            .indent()
            .line(&format!("size = {},", DEFAULT_SIZE))
            .line(&format!("strokeWidth = {},", DEFAULT_STROKE_WIDTH))
            .line("filled = false,")
            .line("className = '',")
            .line("...props")
            .dedent()
            .block_with_close("}) => {", "};", |b| {
                b.block_with_close("return (", ");", |b| {
                    b.line("<svg")
                        .indent()
                        .line("xmlns=\"http://www.w3.org/2000/svg\"")
                        .line("width={size}")
                        .line("height={size}")
                        .line("strokeWidth={strokeWidth}")
                        .line("fill={filled ? 'currentColor' : 'none'}")
                        .line("stroke=\"currentColor\"")
                        .line(&format!("viewBox=\"{}\"", source.view_box))
                        .line("className={className}")
                        .line("strokeLinecap=\"round\"")
                        .line("strokeLinejoin=\"round\"")
                        .line("{...props}")
                        .dedent()
                        .line(">")
                        .indent()
                        .verbatim(source.inner_markup)
                        .dedent()
                        .line("</svg>")
                })
            })
            .blank()
            .line(&format!("export default {};", name))
            .build()
    }
}
