mod common;

use std::fs;

use predicates::prelude::*;

use common::{curriculum, relearn};

#[test]
fn test_validate_empty_curriculum_succeeds() {
    let tmp = curriculum();
    relearn(tmp.path()).arg("validate").assert().success();
}

#[test]
fn test_validate_reports_each_missing_file() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["create", "--topic", "01-fundamentals", "--slug", "hello", "--yes"])
        .assert()
        .success();
    let dir = tmp.path().join("exercises/01-fundamentals/01-hello");
    fs::remove_file(dir.join("vite.config.ts")).unwrap();

    relearn(tmp.path())
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("vite.config.ts"))
        .stdout(predicate::str::contains("01-fundamentals/01-hello"));
}

#[test]
fn test_validate_reports_missing_readme_markers() {
    let tmp = curriculum();
    let dir = tmp.path().join("exercises/02-hooks/01-bare");
    fs::create_dir_all(dir.join("src")).unwrap();
    for file in [
        "package.json",
        "src/App.tsx",
        "src/App.test.tsx",
        "src/main.tsx",
        "tsconfig.json",
        "vite.config.ts",
    ] {
        fs::write(dir.join(file), "").unwrap();
    }
    fs::write(dir.join("README.md"), "# Bare\n\n**Difficulty:** beginner\n").unwrap();

    relearn(tmp.path())
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("**Type:**"))
        .stdout(predicate::str::contains("## Learning Objectives"));
}

#[test]
fn test_completions_bash() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("relearn"));
}

#[test]
fn test_run_named_exercise_on_empty_catalog_fails() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["run", "--exercise", "01-fundamentals/01-hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("演習が見つかりません"));
}
