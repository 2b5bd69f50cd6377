//! Operation: bundle a set of scripts into a single wrapped file.

use std::path::PathBuf;

use scriptpack_codegen::wrapper::{self, WrapperOptions};
use scriptpack_core::config::BundleConfig;
use scriptpack_util::errors::{PackError, PackResult};
use scriptpack_util::fs::ensure_parent_dir;

use crate::resolve_order;

/// Outcome of a successful bundle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleResult {
    pub output_path: PathBuf,
    /// Scripts in the order they were concatenated.
    pub order: Vec<PathBuf>,
    pub bytes_written: usize,
}

/// Resolve, order and concatenate the configured scripts, then write the
/// wrapped bundle to `config.output_path`.
///
/// Nothing is written when any script is unreadable, a dependency is missing
/// from the inputs or the dependencies form a cycle.
pub fn bundle(config: &BundleConfig) -> PackResult<BundleResult> {
    let (order, text) = render(config)?;

    ensure_parent_dir(&config.output_path).map_err(PackError::Io)?;
    std::fs::write(&config.output_path, &text)
        .map_err(|e| PackError::Generic {
            message: format!("Failed to write {}: {e}", config.output_path.display()),
        })?;
    tracing::info!(
        "Wrote {} ({} bytes)",
        config.output_path.display(),
        text.len()
    );

    Ok(BundleResult {
        output_path: config.output_path.clone(),
        order,
        bytes_written: text.len(),
    })
}

/// Produce the bundle text without writing it. Returns the load order too.
pub fn render(config: &BundleConfig) -> PackResult<(Vec<PathBuf>, String)> {
    if config.files.is_empty() {
        return Err(PackError::Generic {
            message: "no input files".to_string(),
        }
        .into());
    }
    tracing::info!(
        "Bundling {} scripts as {}",
        config.files.len(),
        config.package_name
    );

    let license = match &config.license_file {
        Some(path) => Some(std::fs::read_to_string(path).map_err(|e| PackError::read(path, e))?),
        None => None,
    };

    let order = resolve_order(&config.files)?;
    let sources = order
        .iter()
        .map(|path| std::fs::read_to_string(path).map_err(|e| PackError::read(path, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let options = WrapperOptions {
        package_name: &config.package_name,
        version: config.version.as_deref(),
        license: license.as_deref(),
        include_api: config.include_api,
    };
    let text = wrapper::render(&options, &wrapper::join_sources(&sources));
    Ok((order, text))
}
