//! Shared utilities for the scriptpack bundler.
//!
//! This crate provides cross-cutting concerns used by all other scriptpack
//! crates: the unified error type, path normalization helpers, and
//! Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
