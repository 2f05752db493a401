mod common;

use std::fs;

use predicates::prelude::*;
use pretty_assertions::assert_eq;

use common::{curriculum, relearn};

#[test]
fn test_create_non_interactive() {
    let tmp = curriculum();
    fs::create_dir_all(tmp.path().join("exercises/01-fundamentals/01-hello")).unwrap();
    fs::create_dir_all(tmp.path().join("exercises/01-fundamentals/02-broken")).unwrap();

    relearn(tmp.path())
        .args([
            "create",
            "--topic",
            "01-fundamentals",
            "--slug",
            "props-demo",
            "--title",
            "Props Demo",
            "--type",
            "complete-missing",
            "--difficulty",
            "intermediate",
            "--time",
            "20-25 minutes",
            "--dep",
            "styled-components",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("03-props-demo"));

    let dir = tmp.path().join("exercises/01-fundamentals/03-props-demo");
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "@react-learning/03-props-demo");
    assert_eq!(manifest["dependencies"]["styled-components"], "^6.1.8");

    let readme = fs::read_to_string(dir.join("README.md")).unwrap();
    assert!(readme.contains("# Props Demo"));
    assert!(readme.contains("**Difficulty:** intermediate"));
    assert!(readme.contains("20-25 minutes"));
    assert!(!readme.contains("EXERCISE_TITLE"));
    assert_eq!(
        fs::read_to_string(dir.join("SOLUTION.md")).unwrap(),
        "# Props Demo - Solution\n"
    );
}

#[test]
fn test_create_twice_fails_without_touching_first() {
    let tmp = curriculum();
    let args = ["create", "--topic", "02-hooks", "--slug", "usestate-basics", "--yes"];

    relearn(tmp.path()).args(args).assert().success();
    let readme = tmp.path().join("exercises/02-hooks/01-usestate-basics/README.md");
    let before = fs::read(&readme).unwrap();

    relearn(tmp.path())
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("usestate-basics"));

    assert_eq!(fs::read(&readme).unwrap(), before);
    assert!(!tmp.path().join("exercises/02-hooks/02-usestate-basics").exists());
}

#[test]
fn test_create_invalid_slug_exit_one() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["create", "--topic", "02-hooks", "--slug", "Bad_Slug", "--yes"])
        .assert()
        .code(1);
    assert!(!tmp.path().join("exercises").exists());
}

#[test]
fn test_create_rejects_topic_outside_catalog() {
    let tmp = curriculum();
    for topic in ["../outside", "01-fundamentals/nested", "99-unknown"] {
        relearn(tmp.path())
            .args(["create", "--topic", topic, "--slug", "escape", "--yes"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("トピック"));
    }
    assert!(!tmp.path().join("exercises").exists());
    assert!(!tmp.path().join("outside").exists());
}

#[test]
fn test_batch_create_rejects_topic_outside_catalog() {
    let tmp = curriculum();
    fs::write(
        tmp.path().join("batch-exercises.yaml"),
        r#"exercises:
  - topic: ../outside
    name: escape
    title: "Escape"
    type: fix-broken
    difficulty: beginner
    time: 5 minutes
  - topic: 01-fundamentals/nested
    name: nested
    title: "Nested"
    type: fix-broken
    difficulty: beginner
    time: 5 minutes
"#,
    )
    .unwrap();

    relearn(tmp.path())
        .arg("batch-create")
        .assert()
        .success()
        .stdout(predicate::str::contains("トピックが不正です"));

    assert!(!tmp.path().join("outside").exists());
    assert!(!tmp.path().join("exercises/01-fundamentals/nested").exists());
}

#[test]
fn test_create_yes_without_slug_is_error() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["create", "--topic", "02-hooks", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--slug"));
}

#[test]
fn test_batch_create_then_validate() {
    let tmp = curriculum();
    fs::write(
        tmp.path().join("batch-exercises.yaml"),
        r#"exercises:
  - topic: 01-fundamentals
    name: lists-and-keys
    title: "Rendering Lists with Keys"
    type: fix-broken
    difficulty: beginner
    time: 15-20 minutes
  - topic: 03-styling
    name: tailwind-basics
    title: "Tailwind CSS Fundamentals"
    type: build-from-scratch
    difficulty: beginner
    time: 20-25 minutes
    deps: [tailwindcss, postcss]
"#,
    )
    .unwrap();

    relearn(tmp.path())
        .arg("batch-create")
        .assert()
        .success()
        .stdout(predicate::str::contains("01-lists-and-keys"));

    let manifest = fs::read_to_string(
        tmp.path()
            .join("exercises/03-styling/01-tailwind-basics/package.json"),
    )
    .unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(manifest["devDependencies"]["tailwindcss"], "^3.4.1");

    relearn(tmp.path())
        .arg("batch-create")
        .assert()
        .success()
        .stdout(predicate::str::contains("スキップ"));

    relearn(tmp.path()).arg("validate").assert().success();
}

#[test]
fn test_batch_create_missing_list_fails() {
    let tmp = curriculum();
    relearn(tmp.path())
        .args(["batch-create", "--file"])
        .arg(tmp.path().join("nope.yaml"))
        .assert()
        .code(1);
}
