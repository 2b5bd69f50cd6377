//! Script dependency graph construction and topological ordering.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use scriptpack_core::script::ScriptDescriptor;
use scriptpack_util::errors::PackError;

/// Dependency graph over the scripts of one bundle, backed by petgraph.
///
/// Edges point from a dependency to its dependent, so any topological order
/// of the graph is a valid load order. Nodes keep the input order of the
/// descriptors they were built from.
///
/// Sorting works on a separate table of pending dependency counts and leaves
/// the graph untouched, so it can still be inspected after a failed sort.
#[derive(Debug)]
pub struct DepGraph {
    graph: DiGraph<PathBuf, ()>,
    /// Lookup from canonical script path to node index.
    index: HashMap<PathBuf, NodeIndex>,
}

impl DepGraph {
    /// Build the graph for a complete set of script descriptors.
    ///
    /// Every declared dependency must itself be one of the descriptors;
    /// otherwise this fails with [`PackError::MissingDependency`]. A path
    /// listed more than once becomes a single node.
    pub fn new(scripts: &[ScriptDescriptor]) -> Result<Self, PackError> {
        let mut graph = DiGraph::with_capacity(scripts.len(), 0);
        let mut index = HashMap::with_capacity(scripts.len());
        for script in scripts {
            index
                .entry(script.path.clone())
                .or_insert_with(|| graph.add_node(script.path.clone()));
        }

        let mut deps = Self { graph, index };
        for script in scripts {
            let dependent = deps.index[&script.path];
            for dependency in &script.dependencies {
                let Some(&source) = deps.index.get(dependency) else {
                    return Err(PackError::MissingDependency {
                        dependency: dependency.display().to_string(),
                        dependent: script.path.display().to_string(),
                    });
                };
                deps.add_edge(source, dependent);
            }
        }

        tracing::debug!(
            "Built dependency graph with {} scripts and {} edges",
            deps.graph.node_count(),
            deps.graph.edge_count()
        );
        Ok(deps)
    }

    /// Add an edge from `dependency` to `dependent` unless one already exists.
    fn add_edge(&mut self, dependency: NodeIndex, dependent: NodeIndex) {
        if !self.graph.edges(dependency).any(|e| e.target() == dependent) {
            self.graph.add_edge(dependency, dependent, ());
        }
    }

    /// Order the scripts so that every script comes after all of its dependencies.
    ///
    /// This is Kahn's algorithm with a LIFO work stack seeded in input order.
    /// Among scripts that become ready at the same time the order is not
    /// specified, but it is stable for identical input. A script that lists
    /// itself is not considered to wait on itself.
    ///
    /// Fails with [`PackError::Cycle`] naming every script that could not be
    /// placed when the declarations are not acyclic.
    pub fn topological_sort(&self) -> Result<Vec<PathBuf>, PackError> {
        let mut pending: Vec<usize> = self
            .graph
            .node_indices()
            .map(|idx| self.pending_dependencies(idx))
            .collect();

        let mut ready: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| pending[idx.index()] == 0)
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(idx) = ready.pop() {
            order.push(self.graph[idx].clone());
            for edge in self.graph.edges_directed(idx, Direction::Outgoing) {
                let dependent = edge.target();
                if dependent == idx {
                    continue;
                }
                pending[dependent.index()] -= 1;
                if pending[dependent.index()] == 0 {
                    ready.push(dependent);
                }
            }
        }

        if order.len() < self.graph.node_count() {
            let unresolved: Vec<String> = self
                .graph
                .node_indices()
                .filter(|idx| pending[idx.index()] > 0)
                .map(|idx| self.graph[idx].display().to_string())
                .collect();
            tracing::debug!("{} scripts left in a dependency cycle", unresolved.len());
            return Err(PackError::Cycle { unresolved });
        }

        Ok(order)
    }

    /// Number of dependencies of `idx` other than itself.
    fn pending_dependencies(&self, idx: NodeIndex) -> usize {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter(|e| e.source() != idx)
            .count()
    }

    /// Returns `true` if `path` is one of the scripts in the graph.
    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains_key(path)
    }

    /// All scripts, in input order.
    pub fn scripts(&self) -> Vec<&Path> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_path())
            .collect()
    }

    /// Direct dependencies of a script (duplicates collapsed).
    pub fn dependencies_of(&self, path: &Path) -> Vec<&Path> {
        let Some(&idx) = self.index.get(path) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| self.graph[e.source()].as_path())
            .collect()
    }

    /// Scripts that directly depend on `path`.
    pub fn dependents_of(&self, path: &Path) -> Vec<&Path> {
        let Some(&idx) = self.index.get(path) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| self.graph[e.target()].as_path())
            .collect()
    }

    /// Number of scripts in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
