//! Behavioral specs for `testsel plan`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn empty_project_selects_nothing() {
    let project = Project::empty();
    testsel_cmd()
        .arg("plan")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("no tests selected\n");
}

#[test]
fn selectors_from_command_line() {
    let project = Project::empty();
    testsel_cmd()
        .args(["plan", ":app:test", ":core:test/org.example.ParserTest"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(":app:test\n:core:test/org.example.ParserTest\n2 selected: 1 task, 1 class, 0 methods\n");
}

#[test]
fn duplicate_selectors_are_kept() {
    let project = Project::empty();
    testsel_cmd()
        .args(["plan", ":app:test", ":app:test"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("2 selected: 2 tasks"));
}

#[test]
fn fixture_selection_file_is_discovered() {
    testsel_cmd()
        .arg("plan")
        .current_dir(fixture("selection"))
        .assert()
        .success()
        .stdout(
            ":app:test\n:core:test/org.example.ParserTest#parsesEmptyInput\n2 selected: 1 task, 0 classes, 1 method\n",
        );
}

#[test]
fn discovered_from_subdirectory() {
    let project = Project::with_config("version = 1\n\n[[select]]\ntask = \":app:test\"\n");
    project.file("app/src/Main.java", "");

    testsel_cmd()
        .arg("plan")
        .current_dir(project.path().join("app/src"))
        .assert()
        .success()
        .stdout(predicates::str::starts_with(":app:test\n"));
}

#[test]
fn config_entries_come_before_cli_selectors() {
    let project = Project::with_config("version = 1\n\n[[select]]\ntask = \":app:test\"\n");
    testsel_cmd()
        .args(["plan", ":core:test"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with(":app:test\n:core:test\n"));
}

#[test]
fn no_config_ignores_selection_file() {
    let project = Project::with_config("version = 1\n\n[[select]]\ntask = \":app:test\"\n");
    testsel_cmd()
        .args(["plan", "--no-config"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("no tests selected\n");
}

#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("sel/custom.toml", "version = 1\n\n[[select]]\ntask = \":cli:test\"\n");
    testsel_cmd()
        .args(["-C", "sel/custom.toml", "plan"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with(":cli:test\n"));
}

#[test]
fn config_path_from_env() {
    let project = Project::empty();
    project.file("sel.toml", "version = 1\n\n[[select]]\ntask = \":env:test\"\n");
    testsel_cmd()
        .arg("plan")
        .env("TESTSEL_CONFIG", "sel.toml")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::starts_with(":env:test\n"));
}

#[test]
fn json_output() {
    let project = Project::empty();
    let output = testsel_cmd()
        .args(["plan", "-o", "json", ":app:test/Foo#bar"])
        .current_dir(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["descriptors"][0]["kind"], "method");
    assert_eq!(value["descriptors"][0]["class"], "Foo");
}

#[test]
fn compact_json_output() {
    let project = Project::empty();
    testsel_cmd()
        .args(["plan", "-o", "json", "--compact", ":app:test"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout("{\"count\":1,\"descriptors\":[{\"kind\":\"task\",\"task\":\":app:test\"}]}\n");
}

#[test]
fn invalid_selector_is_usage_error() {
    let project = Project::empty();
    testsel_cmd()
        .args(["plan", "app:test"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("task paths start with ':'"));
}

#[test]
fn invalid_selection_file_exits_2() {
    let project = Project::with_config("version = 1\n\n[[select]]\ntask = \":app:test\"\nmethod = \"run\"\n");
    testsel_cmd()
        .arg("plan")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("`method` requires `class`"));
}

#[test]
fn separator_in_selection_file_class_exits_2() {
    let project = Project::with_config(
        "version = 1\n\n[[select]]\ntask = \":app:test\"\nclass = \"Outer#Inner\"\n",
    );
    testsel_cmd()
        .arg("plan")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid class name `Outer#Inner`"));
}

#[test]
fn unsupported_version_exits_2() {
    let project = Project::with_config("version = 3\n");
    testsel_cmd()
        .arg("plan")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported version 3"));
}

#[test]
fn missing_explicit_config_exits_2() {
    let project = Project::empty();
    testsel_cmd()
        .args(["-C", "nope.toml", "plan"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

#[test]
fn unknown_keys_warn_but_succeed() {
    let project = Project::with_config("version = 1\nshuffle = true\n");
    testsel_cmd()
        .arg("plan")
        .current_dir(project.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `shuffle`"));
}
