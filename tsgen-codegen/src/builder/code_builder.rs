//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indent level. Generated model classes are tab-indented.
const INDENT: &str = "\t";

/// Builds tab-indented code line by line.
///
/// # Example
///
/// ```
/// use tsclassgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_line("return 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n\treturn 1;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indent level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
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

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::new();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_tab_indentation() {
        let mut builder = CodeBuilder::new();
        builder
            .push_line("export class A {")
            .push_indent()
            .push_line("x: number;")
            .push_dedent()
            .push_raw("}");
        assert_eq!(builder.build(), "export class A {\n\tx: number;\n}");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new();
        builder
            .push_dedent()
            .push_dedent()
            .push_line("a;")
            .push_indent()
            .push_line("b;");
        assert_eq!(builder.build(), "a;\n\tb;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "function main() {".to_string(),
                    body: vec![CodeFragment::Line("return 1;".to_string())],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "function main() {\n\treturn 1;\n}\n");
    }

    #[test]
    fn test_emit_open_block_then_raw() {
        struct OpenNode;
        impl Renderable for OpenNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::block("class A {", vec![CodeFragment::line("a: string;")], None),
                    CodeFragment::raw("}"),
                ]
            }
        }

        let mut builder = CodeBuilder::new();
        builder.emit(&OpenNode);
        assert_eq!(builder.build(), "class A {\n\ta: string;\n}");
    }
}
