//! Vue single-file component template.

use iconsmith_core::Framework;

use super::{ComponentSource, ComponentTemplate, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use crate::builder::CodeBuilder;

/// Renders a `.vue` single-file component with a `<template>` and an
/// options-API `<script>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueTemplate;

impl ComponentTemplate for VueTemplate {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn render(&self, source: &ComponentSource<'_>) -> String {
        let doc = source.doc_lines();

        CodeBuilder::javascript()
            .block_with_close("<template>", "</template>", |b| {
                b.line("<svg")
                    .indent()
                    .line("xmlns=\"http://www.w3.org/2000/svg\"")
                    .line(":width=\"size\"")
                    .line(":height=\"size\"")
                    .line(":stroke-width=\"strokeWidth\"")
                    .line(":fill=\"filled ? 'currentColor' : 'none'\"")
                    .line("stroke=\"currentColor\"")
                    .line(&format!("viewBox=\"{}\"", source.view_box))
                    .line(":class=\"customClass\"")
                    .line("stroke-linecap=\"round\"")
                    .line("stroke-linejoin=\"round\"")
                    .dedent()
                    .line(">")
                    .indent()
                    .verbatim(source.inner_markup)
                    .dedent()
                    .line("</svg>")
            })
            .blank()
            .line("<script>")
            .jsdoc_block(doc.iter().map(String::as_str))
            .block_with_close("export default {", "}", |b| {
                b.line(&format!("name: '{}',", source.component_name))
                    .block_with_close("props: {", "}", |b| {
                        b.block_with_close("size: {", "},", |b| {
                            b.line("type: [Number, String],")
                                .line(&format!("default: {}", DEFAULT_SIZE))
                        })
                        .block_with_close("strokeWidth: {", "},", |b| {
                            b.line("type: [Number, String],")
                                .line(&format!("default: {}", DEFAULT_STROKE_WIDTH))
                        })
                        .block_with_close("filled: {", "},", |b| {
                            b.line("type: Boolean,").line("default: false")
                        })
                        .block_with_close("customClass: {", "}", |b| {
                            b.line("type: String,").line("default: ''")
                        })
                    })
            })
            .line("</script>")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use iconsmith_core::{Stamp, extract};

    use super::*;

    #[test]
    fn test_vue_component() {
        let content = extract(r#"<svg viewBox="0 0 16 16"><path d="M0 0h16v16"/></svg>"#);
        let source = ComponentSource::new(
            &content,
            "shapes/square.svg",
            "ShapesSquareComponent",
            Stamp::on(2024, 5, 1).unwrap(),
        );

        insta::assert_snapshot!(VueTemplate.render(&source), @r#"
        <template>
          <svg
            xmlns="http://www.w3.org/2000/svg"
            :width="size"
            :height="size"
            :stroke-width="strokeWidth"
            :fill="filled ? 'currentColor' : 'none'"
            stroke="currentColor"
            viewBox="0 0 16 16"
            :class="customClass"
            stroke-linecap="round"
            stroke-linejoin="round"
          >
            <path d="M0 0h16v16"/>
          </svg>
        </template>

        <script>
        /**
         * ShapesSquareComponent
         * Generated from: shapes/square.svg
         * Date: 2024-05-01
         */
        export default {
          name: 'ShapesSquareComponent',
          props: {
            size: {
              type: [Number, String],
              default: 24
            },
            strokeWidth: {
              type: [Number, String],
              default: 1.5
            },
            filled: {
              type: Boolean,
              default: false
            },
            customClass: {
              type: String,
              default: ''
            }
          }
        }
        </script>
        "#);
    }

    #[test]
    fn test_vue_multiline_markup_is_untouched() {
        let markup = "<g>\n<path d=\"M1 1\"/>\n    <rect/>\n</g>";
        let content = extract(&format!("<svg>{markup}</svg>"));
        let source = ComponentSource::new(&content, "g.svg", "G", Stamp::on(2024, 1, 1).unwrap());

        let rendered = VueTemplate.render(&source);

        assert!(rendered.contains(&format!("    {markup}\n  </svg>")));
    }
}
