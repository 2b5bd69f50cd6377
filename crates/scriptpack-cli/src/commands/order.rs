//! Handler for `scriptpack order`.

use std::io::Write;
use std::path::{Path, PathBuf};

use miette::Result;

use scriptpack_core::config::{BundleConfig, ConfigOverrides};
use scriptpack_ops::ops_order::{self, OrderFormat};
use scriptpack_util::errors::PackError;

pub fn exec(json: bool, manifest_path: Option<&Path>, files: Vec<PathBuf>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(PackError::Io)?;

    let overrides = ConfigOverrides {
        files,
        ..ConfigOverrides::default()
    };
    let config = BundleConfig::load(&cwd, manifest_path, overrides)?;

    let order = ops_order::order(&config.files)?;
    let format = if json {
        OrderFormat::Json
    } else {
        OrderFormat::Plain
    };

    let text = ops_order::format_order(&order, format)?;
    std::io::stdout()
        .write_all(text.as_bytes())
        .map_err(PackError::Io)?;
    Ok(())
}
