//! CLI argument definitions for scriptpack.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scriptpack",
    version,
    about = "Bundle JavaScript files in dependency order",
    long_about = "scriptpack reads `//deps` comments from JavaScript files, orders the files so \
                  that every file follows its dependencies, and concatenates them into a single \
                  wrapped bundle exporting a namespace."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle scripts into a single file
    Bundle {
        /// Package namespace to export under (e.g. app.widgets)
        #[arg(long)]
        name: Option<String>,
        /// Version written to the banner
        #[arg(long = "version", value_name = "VERSION")]
        pkg_version: Option<String>,
        /// File whose contents are written to the banner as a comment
        #[arg(long, value_name = "FILE")]
        license: Option<PathBuf>,
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Emit an includeAPI(name) helper for loading sibling packages
        #[arg(long)]
        include_api: bool,
        /// Path to Scriptpack.toml
        #[arg(long, value_name = "FILE")]
        manifest_path: Option<PathBuf>,
        /// Input scripts (replace the manifest's file list)
        files: Vec<PathBuf>,
    },

    /// Print the load order of scripts without bundling
    Order {
        /// Print a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
        /// Path to Scriptpack.toml
        #[arg(long, value_name = "FILE")]
        manifest_path: Option<PathBuf>,
        /// Input scripts (replace the manifest's file list)
        files: Vec<PathBuf>,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
