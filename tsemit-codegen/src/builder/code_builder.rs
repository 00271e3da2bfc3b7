//! Code builder utility for emitting properly indented code.

use super::Indent;

/// Indentation-aware text sink.
///
/// Lines are either written whole with [`push_line`](Self::push_line), or
/// assembled from fragments: [`push_indentation`](Self::push_indentation)
/// starts an indented line, [`push_raw`](Self::push_raw) appends fragments
/// and [`end_line`](Self::end_line) terminates it.
///
/// # Example
///
/// ```
/// use tsemit_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_indentation()
///     .push_raw("console.log('Hello')")
///     .end_line(";")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n  console.log('Hello');\n}\n");
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

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Write the indentation for the current level, starting a new line.
    pub fn push_indentation(&mut self) -> &mut Self {
        self.write_indent();
        self
    }

    /// Add the given text and terminate the current line.
    pub fn end_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Set the indentation level directly.
    pub fn set_indent_level(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the configured indentation style.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
