//! Behavioral specs for directive detection.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Python / YAML tools
// =============================================================================

#[test]
fn pylint_disable_is_reported() {
    let project = Project::new().file("app.py", "x = 1  # pylint: disable=invalid-name\n");
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.join("app.py"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains(":1:pylint:pylint: disable"));
}

#[test]
fn pylint_disable_next_is_labeled_specifically() {
    let project = Project::new().file("app.py", "# pylint: disable-next=missing-docstring\n");
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.join("app.py"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("pylint: disable-next"))
        .stdout(predicates::str::contains("pylint: disable\n").not());
}

#[test]
fn yamllint_disable_is_reported() {
    let project = Project::new().file("ci.yaml", "key: value  # yamllint disable rule:line-length\n");
    nohush_cmd()
        .args(["--tools", "yamllint"])
        .arg(project.join("ci.yaml"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(":1:yamllint:yamllint disable"));
}

#[test]
fn mypy_type_ignore_is_reported() {
    let project = Project::new().file("app.py", "def f(x): return x  # type: ignore[no-untyped-def]\n");
    nohush_cmd()
        .args(["--tools", "mypy"])
        .arg(project.join("app.py"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(":1:mypy:type: ignore"));
}

#[test]
fn enable_counterparts_are_never_reported() {
    let project = Project::new()
        .file("a.yaml", "key: value  # yamllint enable\n")
        .file("b.py", "x = 1  # pylint: enable=invalid-name\n");
    nohush_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let project = Project::new().file("app.py", "x = 1  # PYLINT: DISABLE=foo\n");
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.join("app.py"))
        .assert()
        .code(1);
}

#[test]
fn directive_inside_python_string_is_inert() {
    let project = Project::new().file("app.py", "x = \"# pylint: disable\"\n");
    nohush_cmd()
        .args(["--tools", "pylint"])
        .arg(project.join("app.py"))
        .assert()
        .success();
}

#[test]
fn one_finding_per_tool_per_line() {
    let project = Project::new().file(
        "app.py",
        "x = 1  # pylint: disable=a pylint: disable-next=b\n",
    );
    let output = nohush_cmd()
        .args(["--tools", "pylint", "--count"])
        .arg(project.join("app.py"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().trim(), "1");
}

// =============================================================================
// Clang tools
// =============================================================================

#[test]
fn nolint_is_reported() {
    let project = Project::new().file("main.cpp", "int x = 1; // NOLINT\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.join("main.cpp"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(":1:clang-tidy:NOLINT"));
}

#[test]
fn nolintend_is_not_reported() {
    let project = Project::new().file("main.cpp", "// NOLINTEND(bugprone-*)\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

#[test]
fn nolint_inside_string_literal_is_inert() {
    let project = Project::new().file("main.cpp", "const char* s = \"NOLINT\";\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

#[test]
fn comment_after_string_literal_is_reported() {
    let project = Project::new().file("main.cpp", "const char* s = \"text\"; // NOLINT\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy", "--count"])
        .arg(project.join("main.cpp"))
        .assert()
        .code(1)
        .stdout(predicates::str::diff("1\n"));
}

#[test]
fn escaped_quote_does_not_reopen_code() {
    let project = Project::new().file("main.cpp", "const char* s = \"escaped \\\" NOLINT\";\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

#[test]
fn directive_in_multiline_block_comment_attributed_to_inner_line() {
    let project = Project::new().file("main.cpp", "/* begin\nNOLINT(cert-*) here\nend */\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy"])
        .arg(project.join("main.cpp"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(":2:clang-tidy:NOLINT"));
}

#[test]
fn clang_format_off_is_reported_and_on_is_not() {
    let project = Project::new()
        .file("off.cpp", "// clang-format off\n")
        .file("on.cpp", "// clang-format on\n");
    nohush_cmd()
        .args(["--tools", "clang-format"])
        .arg(project.join("off.cpp"))
        .assert()
        .code(1);
    nohush_cmd()
        .args(["--tools", "clang-format"])
        .arg(project.join("on.cpp"))
        .assert()
        .success();
}

#[test]
fn pragma_ignored_is_reported_from_code() {
    let project = Project::new().file(
        "main.cpp",
        "#pragma clang diagnostic ignored \"-Wunused-variable\"\n",
    );
    nohush_cmd()
        .args(["--tools", "clang-diagnostic"])
        .arg(project.join("main.cpp"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            ":1:clang-diagnostic:#pragma clang diagnostic ignored",
        ));
}

#[test]
fn pragma_push_and_pop_are_not_reported() {
    let project = Project::new().file(
        "main.cpp",
        "#pragma clang diagnostic push\n#pragma clang diagnostic pop\n",
    );
    nohush_cmd()
        .args(["--tools", "clang-diagnostic"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

#[test]
fn pragma_inside_block_comment_is_not_reported() {
    let project = Project::new().file(
        "main.cpp",
        "/* #pragma clang diagnostic ignored \"-Wunused\" */\n",
    );
    nohush_cmd()
        .args(["--tools", "clang-diagnostic"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

// =============================================================================
// Allow patterns
// =============================================================================

#[test]
fn allow_pattern_suppresses_matching_finding() {
    let project = Project::new().file("main.cpp", "int x = 1; // NOLINT(bugprone-use-after-move)\n");
    nohush_cmd()
        .args(["--tools", "clang-tidy", "--allow", "NOLINT(bugprone-*)"])
        .arg(project.join("main.cpp"))
        .assert()
        .success();
}

#[test]
fn allow_pattern_leaves_other_findings() {
    let project = Project::new().file(
        "main.cpp",
        "int a = 1; // NOLINT(bugprone-use-after-move)\nint b = 2; // NOLINT\n",
    );
    nohush_cmd()
        .args(["--tools", "clang-tidy", "--allow", "NOLINT(bugprone-*)"])
        .arg(project.join("main.cpp"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains(":2:clang-tidy:NOLINT"))
        .stdout(predicates::str::contains(":1:").not());
}
