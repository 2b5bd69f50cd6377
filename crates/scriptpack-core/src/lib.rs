//! Core data types for the scriptpack bundler.
//!
//! This crate defines what a bundling run works on: script descriptors built
//! from `//deps` header comments, and the bundle configuration assembled from
//! `Scriptpack.toml` and command-line overrides.
//!
//! This crate performs file reads but no graph analysis or code generation.

/// Default dotted package name for the export namespace.
pub const DEFAULT_PACKAGE_NAME: &str = "app";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "built.js";

/// Name of the optional project manifest.
pub const MANIFEST_FILE: &str = "Scriptpack.toml";

pub mod config;
pub mod script;
