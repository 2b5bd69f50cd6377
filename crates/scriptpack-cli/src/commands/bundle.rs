//! Handler for `scriptpack bundle`.

use std::path::PathBuf;

use miette::Result;

use scriptpack_core::config::{BundleConfig, ConfigOverrides};
use scriptpack_ops::ops_bundle;
use scriptpack_util::errors::PackError;
use scriptpack_util::progress::status;

pub struct BundleArgs {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub include_api: bool,
    pub manifest_path: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

pub fn exec(args: BundleArgs, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(PackError::Io)?;

    let overrides = ConfigOverrides {
        name: args.name,
        version: args.version,
        license: args.license,
        output: args.output,
        include_api: args.include_api,
        files: args.files,
    };
    let config = BundleConfig::load(&cwd, args.manifest_path.as_deref(), overrides)?;
    tracing::debug!("Bundle configuration: {config:?}");

    status(
        "Bundling",
        &format!("{} ({} scripts)", config.package_name, config.files.len()),
    );

    let result = ops_bundle::bundle(&config)?;

    if verbose {
        for path in &result.order {
            status("Included", &path.display().to_string());
        }
    }

    status(
        "Finished",
        &format!(
            "{} ({} bytes)",
            result.output_path.display(),
            result.bytes_written
        ),
    );
    Ok(())
}
