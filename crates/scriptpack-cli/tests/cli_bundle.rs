use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scriptpack_cmd() -> Command {
    Command::cargo_bin("scriptpack").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_bundle_orders_and_writes_default_output() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "main.js", "//deps util.js\nutil();\n");
    write(tmp.path(), "util.js", "function util() {}\n");

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "main.js", "util.js"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Bundling"))
        .stderr(predicate::str::contains("Finished"));

    let built = fs::read_to_string(tmp.path().join("built.js")).unwrap();
    assert!(built.starts_with("(function() {\n"));
    assert!(built.ends_with("})();\n"));
    let util_at = built.find("function util() {}").unwrap();
    let main_at = built.find("util();").unwrap();
    assert!(util_at < main_at);
}

#[test]
fn test_bundle_with_flags() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "src/a.js", "a();\n");
    write(tmp.path(), "LICENSE", "MIT\n");

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args([
            "bundle",
            "--name",
            "acme.widgets",
            "--version",
            "2.1.0",
            "--license",
            "LICENSE",
            "--output",
            "dist/widgets.js",
            "--include-api",
            "src/a.js",
        ])
        .assert()
        .success();

    let built = fs::read_to_string(tmp.path().join("dist/widgets.js")).unwrap();
    assert!(built.starts_with("// acme.widgets version 2.1.0\n//\n// MIT\n"));
    assert!(built.contains("exports = self.acme.widgets;"));
    assert!(built.contains("function includeAPI(name) {"));
    assert!(built.contains("return window.acme[name];"));
}

#[test]
fn test_bundle_reads_manifest() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "Scriptpack.toml",
        "[bundle]\nname = \"shop\"\noutput = \"out/shop.js\"\nfiles = [\"js/cart.js\", \"js/money.js\"]\n",
    );
    write(tmp.path(), "js/cart.js", "//deps money.js\ncart();\n");
    write(tmp.path(), "js/money.js", "money();\n");
    fs::create_dir_all(tmp.path().join("nested")).unwrap();

    scriptpack_cmd()
        .current_dir(tmp.path().join("nested"))
        .args(["bundle"])
        .assert()
        .success();

    let built = fs::read_to_string(tmp.path().join("out/shop.js")).unwrap();
    assert!(built.contains("exports = window.shop;"));
    assert!(built.find("money();").unwrap() < built.find("cart();").unwrap());
}

#[test]
fn test_bundle_missing_dependency_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "main.js", "//deps util.js\n");
    write(tmp.path(), "util.js", "");

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "main.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dependency not included"));

    assert!(!tmp.path().join("built.js").exists());
}

#[test]
fn test_bundle_cycle_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.js", "//deps b.js\n");
    write(tmp.path(), "b.js", "//deps a.js\n");

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "a.js", "b.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not acyclic"));

    assert!(!tmp.path().join("built.js").exists());
}

#[test]
fn test_bundle_without_inputs_fails() {
    let tmp = TempDir::new().unwrap();

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input files"));
}

#[test]
fn test_bundle_unreadable_input_fails() {
    let tmp = TempDir::new().unwrap();

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "nope.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_bundle_invalid_package_name_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.js", "a();\n");

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "--name", "app..ui", "a.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package name"));
}

#[test]
fn test_bundle_explicit_manifest_must_exist() {
    let tmp = TempDir::new().unwrap();

    scriptpack_cmd()
        .current_dir(tmp.path())
        .args(["bundle", "--manifest-path", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
