pub mod ops_bundle;
pub mod ops_order;

use std::path::PathBuf;

use scriptpack_core::script::ScriptDescriptor;
use scriptpack_resolver::graph::DepGraph;
use scriptpack_util::errors::PackResult;
use scriptpack_util::progress::status_warn;

/// Read every input script, build the dependency graph and return the load
/// order. Shared by `bundle` and `order`.
pub fn resolve_order(files: &[PathBuf]) -> PackResult<Vec<PathBuf>> {
    let descriptors = ScriptDescriptor::read_all(files)?;

    for descriptor in descriptors.iter().filter(|d| d.depends_on_itself()) {
        status_warn(
            "Warning",
            &format!("{} lists itself as a dependency", descriptor.path.display()),
        );
    }

    let graph = DepGraph::new(&descriptors)?;
    let order = graph.topological_sort()?;
    tracing::debug!("Resolved load order for {} scripts", order.len());
    Ok(order)
}
