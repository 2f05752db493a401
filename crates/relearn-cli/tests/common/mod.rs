#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub const README_TEMPLATE: &str = "# EXERCISE_TITLE\n\n**Difficulty:** DIFFICULTY_LEVEL\n**Type:** Complete Missing Parts\n**Estimated Time:** ESTIMATED_TIME\n\n## Learning Objectives\n\n- props\n";

/// `templates/<type>/` を必須ファイル一式で作る。
pub fn write_template(root: &Path, kind: &str) {
    let dir = root.join("templates").join(kind);
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(
        dir.join("package.json"),
        "{\n  \"name\": \"template\",\n  \"private\": true,\n  \"scripts\": { \"test\": \"vitest run\" },\n  \"dependencies\": { \"react\": \"^18.2.0\" }\n}\n",
    )
    .unwrap();
    fs::write(dir.join("README.md"), README_TEMPLATE).unwrap();
    fs::write(dir.join("SOLUTION.md"), "# EXERCISE_TITLE - Solution\n").unwrap();
    for file in ["src/App.tsx", "src/App.test.tsx", "src/main.tsx", "tsconfig.json", "vite.config.ts"] {
        fs::write(dir.join(file), "").unwrap();
    }
}

/// テンプレート 3 種を持つカリキュラムを作る。
pub fn curriculum() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for kind in ["fix-broken", "complete-missing", "build-from-scratch"] {
        write_template(tmp.path(), kind);
    }
    tmp
}

pub fn relearn(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("relearn").unwrap();
    cmd.arg("--root").arg(root).env_remove("RELEARN_LOG");
    cmd
}
