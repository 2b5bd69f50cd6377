//! Operation: report the load order without bundling.

use std::path::PathBuf;

use scriptpack_util::errors::{PackError, PackResult};

use crate::resolve_order;

/// How `order` output is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFormat {
    /// One path per line.
    #[default]
    Plain,
    /// A JSON array of path strings.
    Json,
}

/// Resolve and sort `files`, returning the load order.
pub fn order(files: &[PathBuf]) -> PackResult<Vec<PathBuf>> {
    if files.is_empty() {
        return Err(PackError::Generic {
            message: "no input files".to_string(),
        }
        .into());
    }
    resolve_order(files)
}

/// Render an order for printing. Plain output ends with a newline per path.
pub fn format_order(order: &[PathBuf], format: OrderFormat) -> PackResult<String> {
    match format {
        OrderFormat::Plain => Ok(order
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect()),
        OrderFormat::Json => {
            let paths: Vec<String> = order.iter().map(|p| p.display().to_string()).collect();
            let mut json = serde_json::to_string_pretty(&paths).map_err(|e| PackError::Generic {
                message: format!("Failed to serialize order: {e}"),
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}
