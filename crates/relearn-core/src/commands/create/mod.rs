pub mod dependencies;
pub mod docs;
pub mod manifest;
pub mod sequence;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::catalog::{MANIFEST_FILE, README_FILE};
use crate::config::CliConfig;
use crate::error::CoreError;
use crate::model::{Difficulty, ExerciseType};
use crate::progress::ProgressEvent;
use crate::validation::{validate_slug, validate_topic};

pub use dependencies::{lookup_dependency, DependencyPin, DependencySection, LATEST_MARKER};
pub use sequence::{exercise_dir_name, next_sequence, parse_sequence};

/// テンプレート内の解答ドキュメント（存在しない場合もある）。
pub const SOLUTION_FILE: &str = "SOLUTION.md";

const STAGING_PREFIX: &str = ".staging-";
const TOTAL_STEPS: usize = 5;

/// 演習生成の入力。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub topic: String,
    pub slug: String,
    pub title: String,
    pub exercise_type: ExerciseType,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl CreateRequest {
    /// ドキュメントに埋め込むタイトル。空ならスラッグを使う。
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.slug
        } else {
            &self.title
        }
    }
}

/// 生成結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedExercise {
    pub sequence: u32,
    pub name: String,
    pub path: PathBuf,
    pub package_name: String,
}

/// テンプレートから演習ディレクトリを生成する。
///
/// 1. スラッグ・トピック名の検証とトピック内の次の連番決定
/// 2. 同名ディレクトリ・同スラッグの演習・テンプレート欠如を検出したらファイルに触れずに中断
/// 3. トピック内の隠しステージングディレクトリへテンプレートを丸ごとコピー
/// 4. package.json の name と追加依存、README / SOLUTION のプレースホルダを書き換え
/// 5. ステージングを最終名へ rename で公開
///
/// 5 より前に失敗した場合、ステージングは破棄され最終名のディレクトリは現れない。
///
/// # Errors
/// 事前条件違反（`AlreadyExists` / `DuplicateSlug` / `TemplateNotFound` / `InvalidSlug` /
/// `InvalidTopic`）、
/// またはファイルシステム操作の失敗。
pub fn create_exercise(
    root: &Path,
    config: &CliConfig,
    request: &CreateRequest,
    on_progress: impl Fn(ProgressEvent),
) -> Result<CreatedExercise, CoreError> {
    validate_slug(&request.slug).map_err(|reason| CoreError::InvalidSlug {
        slug: request.slug.clone(),
        reason,
    })?;
    validate_topic(&request.topic).map_err(|reason| CoreError::InvalidTopic {
        topic: request.topic.clone(),
        reason,
    })?;

    let topic_path = config.exercises_root(root).join(&request.topic);
    let sequence = next_sequence(&topic_path);
    let name = exercise_dir_name(sequence, &request.slug);
    let exercise_path = topic_path.join(&name);
    let target = format!("{}/{name}", request.topic);

    if exercise_path.exists() {
        return Err(CoreError::AlreadyExists {
            name,
            path: exercise_path,
        });
    }
    if let Some(existing) = sequence::find_slug(&topic_path, &request.slug) {
        return Err(CoreError::DuplicateSlug {
            slug: request.slug.clone(),
            existing,
        });
    }
    let template_path = config
        .templates_root(root)
        .join(request.exercise_type.dir_name());
    if !template_path.is_dir() {
        return Err(CoreError::TemplateNotFound(template_path));
    }

    on_progress(ProgressEvent::Started {
        step: 1,
        total: TOTAL_STEPS,
        target: format!("連番 {sequence:02} を割り当てました: {target}"),
    });

    fs::create_dir_all(&topic_path)
        .map_err(|e| CoreError::io("トピックディレクトリの作成に失敗", &topic_path, e))?;
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(&topic_path)
        .map_err(|e| CoreError::io("ステージングディレクトリの作成に失敗", &topic_path, e))?;
    tracing::debug!(staging = %staging.path().display(), "ステージングを作成");

    on_progress(ProgressEvent::Started {
        step: 2,
        total: TOTAL_STEPS,
        target: format!("テンプレート {} をコピー中", request.exercise_type),
    });
    copy_dir_recursive(&template_path, staging.path())?;

    let package_name = format!("{}/{name}", config.package_scope);
    on_progress(ProgressEvent::Started {
        step: 3,
        total: TOTAL_STEPS,
        target: format!("{MANIFEST_FILE} を更新中 ({package_name})"),
    });
    manifest::rewrite_manifest(
        &staging.path().join(MANIFEST_FILE),
        &package_name,
        &request.dependencies,
    )?;

    on_progress(ProgressEvent::Started {
        step: 4,
        total: TOTAL_STEPS,
        target: format!("{README_FILE} のプレースホルダを置換中"),
    });
    let title = request.display_title();
    docs::rewrite_file(&staging.path().join(README_FILE), false, |text| {
        docs::fill_readme(
            text,
            title,
            request.difficulty.as_str(),
            &request.estimated_time,
        )
    })?;
    docs::rewrite_file(&staging.path().join(SOLUTION_FILE), true, |text| {
        docs::fill_solution(text, title)
    })?;

    on_progress(ProgressEvent::Started {
        step: 5,
        total: TOTAL_STEPS,
        target: format!("{target} を公開中"),
    });
    if exercise_path.exists() {
        return Err(CoreError::AlreadyExists {
            name,
            path: exercise_path,
        });
    }
    fs::rename(staging.path(), &exercise_path)
        .map_err(|e| CoreError::io("演習ディレクトリの公開に失敗", &exercise_path, e))?;
    // rename 後の TempDir の drop は存在しないパスの削除となり何もしない
    drop(staging);

    tracing::info!(exercise = %target, package = %package_name, "演習を生成しました");
    on_progress(ProgressEvent::Succeeded {
        step: TOTAL_STEPS,
        total: TOTAL_STEPS,
        target,
    });

    Ok(CreatedExercise {
        sequence,
        name,
        path: exercise_path,
        package_name,
    })
}

/// ディレクトリツリーをそのままコピーする。
///
/// シンボリックリンクは辿り、リンク先の実体をコピーする。循環リンクは走査エラー。
fn copy_dir_recursive(from: &Path, to: &Path) -> Result<(), CoreError> {
    for entry in WalkDir::new(from).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            CoreError::io("テンプレートの走査に失敗", path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|_| CoreError::io(
                "テンプレートの走査に失敗",
                entry.path(),
                std::io::Error::other("テンプレート外のパス"),
            ))?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .map_err(|e| CoreError::io("ディレクトリの作成に失敗", &dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| CoreError::io("ディレクトリの作成に失敗", parent, e))?;
            }
            fs::copy(entry.path(), &dest)
                .map_err(|e| CoreError::io("ファイルのコピーに失敗", entry.path(), e))?;
        }
    }
    Ok(())
}
