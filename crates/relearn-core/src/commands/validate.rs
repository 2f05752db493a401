use std::fs;

use crate::catalog::README_FILE;
use crate::model::ExerciseRecord;

/// 各演習に必須のファイル（演習ディレクトリからの相対パス）。
pub const REQUIRED_FILES: [&str; 7] = [
    "package.json",
    "README.md",
    "src/App.tsx",
    "src/App.test.tsx",
    "src/main.tsx",
    "tsconfig.json",
    "vite.config.ts",
];

/// README に必須のマーカーと、欠けていた場合の指摘内容。
pub const DOC_MARKERS: [(&str, &str); 3] = [
    ("**Difficulty:**", "README に難易度 (**Difficulty:**) がありません"),
    ("**Type:**", "README に演習タイプ (**Type:**) がありません"),
    ("## Learning Objectives", "README に学習目標 (## Learning Objectives) がありません"),
];

/// 演習 1 件の検証結果。
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub exercise: ExerciseRecord,
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// 必須ファイルの有無と README のマーカーを検査する。
pub fn validate_exercise(exercise: &ExerciseRecord) -> ValidationReport {
    let mut issues: Vec<String> = REQUIRED_FILES
        .iter()
        .filter(|file| !exercise.path.join(file).exists())
        .map(|file| format!("ファイルがありません: {file}"))
        .collect();

    // README が読めない場合は上のファイル欠如のみを指摘する
    if let Ok(readme) = fs::read_to_string(exercise.path.join(README_FILE)) {
        issues.extend(
            DOC_MARKERS
                .iter()
                .filter(|(marker, _)| !readme.contains(marker))
                .map(|(_, issue)| (*issue).to_string()),
        );
    }

    ValidationReport {
        exercise: exercise.clone(),
        issues,
    }
}

pub fn validate_all(exercises: &[ExerciseRecord]) -> Vec<ValidationReport> {
    exercises.iter().map(validate_exercise).collect()
}

/// 検証結果の集計。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub with_issues: usize,
}

impl ValidationSummary {
    pub fn from_reports(reports: &[ValidationReport]) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            total: reports.len(),
            valid,
            with_issues: reports.len() - valid,
        }
    }

    pub fn is_success(&self) -> bool {
        self.with_issues == 0
    }
}
