use std::path::Path;

use serde::{Deserialize, Serialize};

use super::create::{create_exercise, CreateRequest};
use crate::config::CliConfig;
use crate::error::CoreError;
use crate::model::{Difficulty, ExerciseType};
use crate::progress::ProgressEvent;

/// 一括生成リストの 1 項目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub topic: String,
    /// 連番を除いたスラッグ
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub difficulty: Difficulty,
    pub time: String,
    #[serde(default)]
    pub deps: Vec<String>,
}

impl BatchEntry {
    pub fn to_request(&self) -> CreateRequest {
        CreateRequest {
            topic: self.topic.clone(),
            slug: self.name.clone(),
            title: self.title.clone(),
            exercise_type: self.exercise_type,
            difficulty: self.difficulty,
            estimated_time: self.time.clone(),
            dependencies: self.deps.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    exercises: Vec<BatchEntry>,
}

/// 一括生成リスト（YAML）を読み込む。
///
/// # Errors
/// ファイルが読めない、または YAML として解釈できない場合は `BatchFile`。
pub fn load_batch_file(path: &Path) -> Result<Vec<BatchEntry>, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::BatchFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file: BatchFile = serde_yaml::from_str(&content).map_err(|e| CoreError::BatchFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(file.exercises)
}

/// 一括生成の集計結果。
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    /// (項目名, エラー内容)
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// リストの順に演習を生成する。
///
/// 既存演習との衝突はスキップ、それ以外のエラーは項目単位の失敗として記録し、
/// どちらの場合も次の項目に進む。
pub fn create_batch(
    root: &Path,
    config: &CliConfig,
    entries: &[BatchEntry],
    on_progress: impl Fn(ProgressEvent),
) -> BatchSummary {
    let total = entries.len();
    let mut summary = BatchSummary::default();

    for (index, entry) in entries.iter().enumerate() {
        let step = index + 1;
        let label = format!("{}/{}", entry.topic, entry.name);
        on_progress(ProgressEvent::Started {
            step,
            total,
            target: label.clone(),
        });

        match create_exercise(root, config, &entry.to_request(), |_| {}) {
            Ok(created) => {
                let target = format!("{}/{}", entry.topic, created.name);
                on_progress(ProgressEvent::Succeeded {
                    step,
                    total,
                    target: target.clone(),
                });
                summary.created.push(target);
            }
            Err(e) if e.is_precondition() => {
                tracing::info!(exercise = %label, "既存のためスキップ");
                on_progress(ProgressEvent::Skipped {
                    target: label.clone(),
                    reason: e.to_string(),
                });
                summary.skipped.push(label);
            }
            Err(e) => {
                tracing::warn!(exercise = %label, error = %e, "演習の生成に失敗");
                on_progress(ProgressEvent::Failed {
                    step,
                    total,
                    target: label.clone(),
                    detail: e.to_string(),
                });
                summary.failed.push((label, e.to_string()));
            }
        }
    }

    on_progress(ProgressEvent::Finished {
        success: summary.is_success(),
        message: format!(
            "作成 {} 件 / スキップ {} 件 / 失敗 {} 件",
            summary.created.len(),
            summary.skipped.len(),
            summary.failed.len()
        ),
    });
    summary
}
