//! Dependency resolution for scriptpack: builds the script dependency graph,
//! validates that every declared dependency is part of the bundle, and
//! produces a load order with dependencies first.

pub mod graph;
