//! Emission primitives for generated registration source
//!
//! `CodeBlock` is an immutable rendered fragment; `MultiStatement` is an
//! ordered statement list that knows how to render itself as a closure
//! argument, inlining a single statement and bracing two or more.

use std::fmt;
use std::fmt::Write;

/// An immutable fragment of generated source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
}

impl CodeBlock {
    /// Start building a block.
    pub fn builder() -> CodeBlockBuilder {
        CodeBlockBuilder::default()
    }

    /// A block holding `text` verbatim.
    pub fn of(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the block holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for CodeBlock {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for CodeBlock {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

/// Append-only builder for a `CodeBlock`.
#[derive(Debug, Default)]
pub struct CodeBlockBuilder {
    out: String,
}

impl CodeBlockBuilder {
    /// Append raw text.
    pub fn add(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    /// Append another block.
    pub fn add_block(&mut self, block: &CodeBlock) -> &mut Self {
        self.out.push_str(block.as_str());
        self
    }

    /// Finish building.
    pub fn build(self) -> CodeBlock {
        CodeBlock { text: self.out }
    }
}

/// Render `value` as an escaped string literal.
pub fn str_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render `value` as an escaped character literal.
pub fn char_literal(value: char) -> String {
    match value {
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        '\n' => "'\\n'".to_string(),
        '\r' => "'\\r'".to_string(),
        '\t' => "'\\t'".to_string(),
        c => format!("'{c}'"),
    }
}

/// An ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiStatement {
    statements: Vec<CodeBlock>,
}

impl MultiStatement {
    /// New empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the list holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Append one statement. Statements carry no trailing `;`; the renderer
    /// adds terminators where the output shape needs them.
    pub fn add_statement(&mut self, statement: impl Into<CodeBlock>) {
        self.statements.push(statement.into());
    }

    /// The statements in order.
    pub fn statements(&self) -> &[CodeBlock] {
        &self.statements
    }

    /// Render as a closure with the given parameter list (e.g. `"|bd|"`).
    /// A single statement is inlined as the closure body; two or more render
    /// as a braced block whose statements sit at `indent + 4` and whose
    /// closing brace sits at `indent`. The final statement renders as the
    /// tail expression, so value-producing closures yield their last
    /// statement's result.
    pub fn to_closure(&self, params: &str, indent: usize) -> CodeBlock {
        match self.statements.len() {
            0 => CodeBlock::of(format!("{params} {{}}")),
            1 => CodeBlock::of(format!("{params} {}", self.statements[0])),
            _ => {
                let mut out = String::new();
                write!(out, "{params} {{").unwrap();
                for (i, statement) in self.statements.iter().enumerate() {
                    let terminator = if i + 1 == self.statements.len() { "" } else { ";" };
                    write!(out, "\n{:width$}{statement}{terminator}", "", width = indent + 4)
                        .unwrap();
                }
                write!(out, "\n{:width$}}}", "", width = indent).unwrap();
                CodeBlock::of(out)
            }
        }
    }
}
