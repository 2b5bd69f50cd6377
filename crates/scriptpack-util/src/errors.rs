use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all scriptpack operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script, license, or source file could not be resolved or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A script declares a dependency that is not among the bundle inputs.
    #[error("dependency not included: {dependency}")]
    #[diagnostic(help(
        "declared by {dependent}; add the file to the inputs or fix its //deps line"
    ))]
    MissingDependency {
        dependency: String,
        dependent: String,
    },

    /// The dependency declarations form at least one cycle.
    #[error("the graph is not acyclic ({} scripts unresolved)", .unresolved.len())]
    #[diagnostic(help("unresolved scripts: {}", .unresolved.join(", ")))]
    Cycle { unresolved: Vec<String> },

    /// Invalid or malformed manifest (`Scriptpack.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Scriptpack.toml for syntax errors"))]
    Manifest { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl PackError {
    /// Wrap an I/O failure together with the path that caused it.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type PackResult<T> = miette::Result<T>;
