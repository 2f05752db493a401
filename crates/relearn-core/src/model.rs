use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 難易度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// README に埋め込む値。
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// 選択肢の表示名。
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("不明な難易度です: {s}")),
        }
    }
}

/// 演習タイプ。テンプレートディレクトリ名と一対一に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    FixBroken,
    CompleteMissing,
    BuildFromScratch,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 3] = [
        ExerciseType::FixBroken,
        ExerciseType::CompleteMissing,
        ExerciseType::BuildFromScratch,
    ];

    /// `templates/<dir_name>/` のディレクトリ名。
    pub fn dir_name(self) -> &'static str {
        match self {
            ExerciseType::FixBroken => "fix-broken",
            ExerciseType::CompleteMissing => "complete-missing",
            ExerciseType::BuildFromScratch => "build-from-scratch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExerciseType::FixBroken => "Fix Broken Code",
            ExerciseType::CompleteMissing => "Complete Missing Parts",
            ExerciseType::BuildFromScratch => "Build From Scratch",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ExerciseType::ALL
            .into_iter()
            .find(|t| t.dir_name() == normalized || t.label().to_lowercase() == normalized)
            .ok_or_else(|| format!("不明な演習タイプです: {s}"))
    }
}

/// 走査で得られる演習 1 件分の情報。
///
/// 識別子は `(topic, name)`。`difficulty` と `exercise_type` は README から
/// 読み取ったラベルそのままで、見つからない場合は空文字列になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRecord {
    pub topic: String,
    pub name: String,
    pub path: PathBuf,
    pub title: Option<String>,
    pub difficulty: String,
    pub exercise_type: String,
    pub estimated_time: Option<String>,
}

impl ExerciseRecord {
    pub fn new(topic: impl Into<String>, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            topic: topic.into(),
            name: name.into(),
            path: path.into(),
            title: None,
            difficulty: String::new(),
            exercise_type: String::new(),
            estimated_time: None,
        }
    }

    /// `topic/name` 形式の識別子。
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.topic, self.name)
    }

    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    pub fn kind(&self) -> Option<ExerciseType> {
        self.exercise_type.parse().ok()
    }
}
