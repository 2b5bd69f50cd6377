//! Script descriptors and the `//deps` header comment convention.
//!
//! A script declares what must be loaded before it with one or more lines of
//! the form
//!
//! ```text
//! //deps ../lib/dom.js events.js
//! ```
//!
//! Paths are relative to the declaring file's directory (or absolute).

use std::path::{Path, PathBuf};

use scriptpack_util::errors::PackError;
use scriptpack_util::fs::{normalize, normalize_from};

/// Prefix that marks a dependency declaration line, trailing space included.
pub const DEPENDENCY_KEYWORD: &str = "//deps ";

/// Extract the raw dependency tokens declared in a script's source text.
///
/// Lines are trimmed before matching, tokens are separated by single spaces,
/// and empty tokens are dropped. Declarations accumulate in file order.
pub fn parse_dependency_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in text.split('\n') {
        let Some(rest) = line.trim().strip_prefix(DEPENDENCY_KEYWORD) else {
            continue;
        };
        tokens.extend(
            rest.split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        );
    }
    tokens
}

/// One input script: its canonical path and the canonical paths it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDescriptor {
    /// Absolute, normalized path; the unique key of the script.
    pub path: PathBuf,
    /// Declared dependencies in declaration order. Duplicates are kept.
    pub dependencies: Vec<PathBuf>,
}

impl ScriptDescriptor {
    /// Read the script at `path` and resolve its `//deps` declarations.
    ///
    /// Fails with [`PackError::Read`] if the path cannot be resolved or the
    /// file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, PackError> {
        let abs = normalize(path).map_err(|e| PackError::read(path, e))?;
        let contents = std::fs::read_to_string(&abs).map_err(|e| PackError::read(&abs, e))?;
        let descriptor = Self::from_source(abs, &contents);

        tracing::debug!(
            "Read {} ({} declared dependencies)",
            descriptor.path.display(),
            descriptor.dependencies.len()
        );
        Ok(descriptor)
    }

    /// Build a descriptor for the script at the already normalized `path`
    /// whose text is `contents`.
    ///
    /// Declarations resolve against the directory `path` names, even when
    /// the file itself is a symlink to somewhere else.
    pub fn from_source(path: PathBuf, contents: &str) -> Self {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let dependencies = parse_dependency_tokens(contents)
            .iter()
            .map(|token| normalize_from(&dir, Path::new(token)))
            .collect();

        Self { path, dependencies }
    }

    /// Build descriptors for every path, in input order, stopping at the first failure.
    pub fn read_all(paths: &[PathBuf]) -> Result<Vec<Self>, PackError> {
        paths.iter().map(|p| Self::from_path(p)).collect()
    }

    /// Returns `true` if the script lists itself as a dependency.
    pub fn depends_on_itself(&self) -> bool {
        self.dependencies.iter().any(|dep| dep == &self.path)
    }
}
