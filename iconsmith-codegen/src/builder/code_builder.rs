//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use iconsmith_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::javascript()
///     .block_with_close("export default {", "}", |b| b.line("name: 'Star',"))
///     .build();
///
/// assert_eq!(code, "export default {\n  name: 'Star',\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Embed a multi-line text verbatim.
    ///
    /// Only the first line receives the current indentation; the following
    /// lines are copied untouched so the text is never altered.
    pub fn verbatim(mut self, text: &str) -> Self {
        if !text.is_empty() {
            self.write_indent();
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a multi-line JSDoc comment:
    ///
    /// ```text
    /// /**
    ///  * first
    ///  * second
    ///  */
    /// ```
    pub fn jsdoc_block<'a>(self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut builder = self.line("/**");
        for text in lines {
            builder = if text.is_empty() {
                builder.line(" *")
            } else {
                builder.line(&format!(" * {}", text))
            };
        }
        builder.line(" */")
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Build the final string.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}
