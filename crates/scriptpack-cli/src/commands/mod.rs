//! Command dispatch and handler modules.

mod bundle;
mod order;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Bundle {
            name,
            pkg_version,
            license,
            output,
            include_api,
            manifest_path,
            files,
        } => bundle::exec(
            bundle::BundleArgs {
                name,
                version: pkg_version,
                license,
                output,
                include_api,
                manifest_path,
                files,
            },
            cli.verbose,
        ),
        Command::Order {
            json,
            manifest_path,
            files,
        } => order::exec(json, manifest_path.as_deref(), files),
    }
}
