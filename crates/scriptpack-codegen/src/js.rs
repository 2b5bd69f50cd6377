//! Formatting helpers for emitting JavaScript source text.

use std::fmt;

/// An `if` / `else if` chain. Renders without a trailing newline.
#[derive(Debug, Clone, Default)]
pub struct IfStatement {
    /// `(condition, block)` pairs in evaluation order.
    branches: Vec<(String, String)>,
}

impl IfStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `else if` branch (the first branch is the plain `if`).
    pub fn branch(mut self, condition: impl Into<String>, block: impl Into<String>) -> Self {
        self.branches.push((condition.into(), block.into()));
        self
    }
}

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (condition, block)) in self.branches.iter().enumerate() {
            if i != 0 {
                f.write_str("} else ")?;
            }
            writeln!(f, "if ({condition}) {{")?;
            writeln!(f, "{}", indent_code("  ", block.trim()))?;
        }
        f.write_str("}")
    }
}

/// A `.` separated JavaScript namespace such as `window.app.widgets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn components(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    /// Code that creates every missing object along the namespace, skipping
    /// the root object itself.
    ///
    /// `window.app.ui` yields guards for `window.app` and `window.app.ui`.
    pub fn creation_code(&self) -> String {
        let components = self.components();
        (1..components.len())
            .map(|i| {
                let object = components[..=i].join(".");
                IfStatement::new()
                    .branch(format!("!{object}"), format!("{object} = {{}};"))
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefix every line of `code` with `indent`.
pub fn indent_code(indent: &str, code: &str) -> String {
    code.split('\n')
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn a block of text into `// ` line comments.
pub fn comment_out(code: &str) -> String {
    indent_code("// ", code.trim())
}

/// Strip the whitespace from lines that contain nothing else.
pub fn clean_empty_lines(code: &str) -> String {
    code.split('\n')
        .map(|line| if line.trim().is_empty() { "" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}
