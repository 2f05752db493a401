use std::path::PathBuf;

use thiserror::Error;

/// コア操作のエラー。
///
/// 一括生成では `AlreadyExists` / `DuplicateSlug` をスキップとして扱い、
/// それ以外を項目単位の失敗として集計する。
#[derive(Debug, Error)]
pub enum CoreError {
    /// スラッグが `^[a-z0-9-]+$` に一致しない
    #[error("スラッグが不正です: '{slug}' ({reason})")]
    InvalidSlug { slug: String, reason: String },

    /// トピック名が演習ルート直下の 1 階層を指していない
    #[error("トピックが不正です: '{topic}' ({reason})")]
    InvalidTopic { topic: String, reason: String },

    /// 同名の演習ディレクトリが既に存在する
    #[error("演習は既に存在します: {name}")]
    AlreadyExists { name: String, path: PathBuf },

    /// 同じトピック内に同じスラッグの演習が既に存在する
    #[error("スラッグ '{slug}' は既に使用されています: {existing}")]
    DuplicateSlug { slug: String, existing: String },

    /// 演習タイプに対応するテンプレートが無い
    #[error("テンプレートディレクトリが見つかりません: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// マニフェスト (package.json) を解釈できない
    #[error("マニフェストの解析に失敗: {}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 一括生成リストを読み込めない
    #[error("一括生成リストの読み込みに失敗: {}: {reason}", .path.display())]
    BatchFile { path: PathBuf, reason: String },

    /// ファイルシステム操作の失敗
    #[error("{action}: {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// 既存演習との衝突（事前条件違反）かどうか。
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. } | Self::DuplicateSlug { .. })
    }
}
