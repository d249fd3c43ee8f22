//! Indentation-aware writer for C# sources.

/// One indentation level in generated C#.
const INDENT: &str = "    ";

/// Fluent writer that keeps track of the current indentation.
///
/// # Example
///
/// ```
/// use poolgen_generators::CodeWriter;
///
/// let mut writer = CodeWriter::new();
/// writer.block("public static class Pools", |w| {
///     w.line("static Entitas.Pool _pool;");
/// });
///
/// assert_eq!(
///     writer.build(),
///     "public static class Pools {\n    static Entitas.Pool _pool;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    indent_level: usize,
    buffer: String,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(&mut self, s: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s.as_ref());
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Write `header {`, the indented body, then the closing brace.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.indent();
        body(self);
        self.dedent();
        self.line("}")
    }

    /// Write a `string[]` initializer listing `items` as string literals.
    pub fn string_array<'a>(
        &mut self,
        declaration: impl AsRef<str>,
        items: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        self.line(format!("{} = {{", declaration.as_ref()));
        self.indent();
        for item in items {
            self.line(format!("\"{}\",", item));
        }
        self.dedent();
        self.line("};")
    }

    /// Consume the writer and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
