//! Behavioral specs for file discovery and applicability filtering.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn directories_are_walked_recursively() {
    let project = Project::new()
        .file("top.py", "x = 1  # pylint: disable=a\n")
        .file("pkg/inner.py", "y = 2  # pylint: disable=b\n");
    nohush_cmd()
        .args(["--tools", "pylint", "--count"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::diff("2\n"));
}

#[test]
fn findings_are_ordered_by_sorted_file_path() {
    let project = Project::new()
        .file("b.py", "x = 1  # pylint: disable\n")
        .file("a.py", "y = 2  # pylint: disable\n");
    let output = nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("a.py"));
    assert!(lines[1].contains("b.py"));
}

#[test]
fn exclude_glob_skips_matching_files() {
    let project = Project::new()
        .file("app.py", "x = 1  # pylint: disable\n")
        .file("app_test.py", "y = 2  # pylint: disable\n");
    nohush_cmd()
        .args(["--tools", "pylint", "--exclude", "*_test.py"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("app.py:"))
        .stdout(predicates::str::contains("app_test.py").not());
}

#[test]
fn files_with_no_applicable_tool_are_silently_skipped() {
    let project = Project::new()
        .file("notes.txt", "# pylint: disable\n")
        .file("main.cpp", "// NOLINT\n");
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn clang_tools_apply_only_to_c_family_extensions() {
    let project = Project::new()
        .file("main.cpp", "int x = 1; // NOLINT\n")
        .file("script.py", "x = 1  # NOLINT\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("main.cpp"))
        .stdout(predicates::str::contains("script.py").not());
}

#[test]
fn python_tools_apply_to_pyi_stubs_per_tool() {
    let project = Project::new().file("stub.pyi", "x: int  # type: ignore\n");
    // mypy covers .pyi, pylint does not.
    nohush_cmd()
        .args(["--tools", "mypy", "--count"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::diff("1\n"));
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.path())
        .assert()
        .success();
}

#[test]
fn max_depth_limits_directory_recursion() {
    let project = Project::new()
        .file("top.py", "x = 1  # pylint: disable\n")
        .file("sub/nested.py", "y = 2  # pylint: disable\n");
    nohush_cmd()
        .args(["--tools", "pylint", "--max-depth", "1", "--count"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::diff("1\n"));
}

#[test]
fn node_modules_is_never_scanned() {
    let project = Project::new()
        .file("app.py", "x = 1  # pylint: disable\n")
        .file("node_modules/dep.py", "y = 2  # pylint: disable\n");
    nohush_cmd()
        .args(["--tools", "pylint", "--count"])
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::diff("1\n"));
}

#[test]
fn explicitly_named_files_bypass_extension_of_directory_walk() {
    // A file named directly is still subject to extension applicability.
    let project = Project::new().file("conf.yaml", "k: v  # yamllint disable\n");
    nohush_cmd()
        .args(["--tools", "yamllint"])
        .arg(project.join("conf.yaml"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("yamllint disable"));
}
