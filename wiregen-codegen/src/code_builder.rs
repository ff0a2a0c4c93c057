//! Code builder utility for generating tab-indented Go source.

/// Fluent API for building Go source with tab indentation.
///
/// # Example
///
/// ```
/// use wiregen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("func main() {")
///     .indent()
///     .line("fmt.Println(\"hello\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tfmt.Println(\"hello\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
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

    /// Add a delimited group with indented body, e.g. an import block or a
    /// call spanning multiple lines.
    ///
    /// # Example
    ///
    /// ```
    /// use wiregen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::new()
    ///     .group("import (", ")", |b| b.line("\"fmt\""))
    ///     .build();
    ///
    /// assert_eq!(code, "import (\n\t\"fmt\"\n)\n");
    /// ```
    pub fn group<F>(self, open: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(open).indent();
        f(builder).dedent().line(close)
    }

    /// Consume the builder and return the generated source.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_applies_indentation() {
        let code = CodeBuilder::new()
            .line("a")
            .indent()
            .line("b")
            .indent()
            .line("c")
            .dedent()
            .line("d")
            .build();

        assert_eq!(code, "a\n\tb\n\t\tc\n\td\n");
    }

    #[test]
    fn test_blank_line_carries_no_indentation() {
        let code = CodeBuilder::new().indent().blank().line("x").build();

        assert_eq!(code, "\n\tx\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let code = CodeBuilder::new().dedent().line("top").build();

        assert_eq!(code, "top\n");
    }

    #[test]
    fn test_group_restores_indentation() {
        let code = CodeBuilder::new()
            .group("var set = wire.NewSet(", ")", |b| b.line("pkg.Provide,"))
            .line("after")
            .build();

        assert_eq!(code, "var set = wire.NewSet(\n\tpkg.Provide,\n)\nafter\n");
    }
}
