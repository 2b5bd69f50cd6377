use std::path::PathBuf;

use scriptpack_core::script::ScriptDescriptor;
use scriptpack_resolver::graph::DepGraph;
use scriptpack_util::errors::PackError;
use tempfile::TempDir;

fn write(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn main_and_util_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    let main = write(&tmp, "main.js", "//deps util.js\nrun();\n");
    let util = write(&tmp, "util.js", "function run() {}\n");

    let scripts = ScriptDescriptor::read_all(&[main.clone(), util.clone()]).unwrap();
    assert_eq!(scripts[0].dependencies, vec![util.clone()]);

    let order = DepGraph::new(&scripts).unwrap().topological_sort().unwrap();
    assert_eq!(order, vec![util, main]);
}

#[test]
fn nested_directories_resolve_against_declaring_file() {
    let tmp = TempDir::new().unwrap();
    let app = write(&tmp, "src/app.js", "//deps widgets/button.js\n");
    let button = write(&tmp, "src/widgets/button.js", "//deps ../../lib/dom.js\n");
    let dom = write(&tmp, "lib/dom.js", "");

    let scripts = ScriptDescriptor::read_all(&[app, button, dom]).unwrap();
    let order = DepGraph::new(&scripts).unwrap().topological_sort().unwrap();

    let names: Vec<_> = order
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["dom.js", "button.js", "app.js"]);
}

#[test]
fn dependency_outside_inputs_is_reported() {
    let tmp = TempDir::new().unwrap();
    let main = write(&tmp, "main.js", "//deps util.js\n");
    write(&tmp, "util.js", "");

    let scripts = ScriptDescriptor::read_all(&[main]).unwrap();
    let err = DepGraph::new(&scripts).unwrap_err();
    match err {
        PackError::MissingDependency { dependency, .. } => {
            assert!(dependency.ends_with("util.js"), "got: {dependency}");
        }
        other => panic!("expected missing dependency, got {other:?}"),
    }
}

#[test]
fn cycle_across_files_is_reported() {
    let tmp = TempDir::new().unwrap();
    let a = write(&tmp, "a.js", "//deps b.js\n");
    let b = write(&tmp, "b.js", "//deps a.js\n");

    let scripts = ScriptDescriptor::read_all(&[a, b]).unwrap();
    let graph = DepGraph::new(&scripts).unwrap();
    assert!(matches!(
        graph.topological_sort(),
        Err(PackError::Cycle { ref unresolved }) if unresolved.len() == 2
    ));
    assert_eq!(graph.len(), 2);
}
