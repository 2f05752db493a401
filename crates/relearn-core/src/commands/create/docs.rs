use std::fs;
use std::path::Path;

use crate::error::CoreError;

pub const TITLE_TOKEN: &str = "EXERCISE_TITLE";
pub const DIFFICULTY_TOKEN: &str = "DIFFICULTY_LEVEL";
pub const TIME_TOKEN: &str = "ESTIMATED_TIME";

/// README のプレースホルダを置換する。
pub fn fill_readme(text: &str, title: &str, difficulty: &str, estimated_time: &str) -> String {
    text.replace(TITLE_TOKEN, title)
        .replace(DIFFICULTY_TOKEN, difficulty)
        .replace(TIME_TOKEN, estimated_time)
}

/// SOLUTION.md はタイトルのみ置換する。
pub fn fill_solution(text: &str, title: &str) -> String {
    text.replace(TITLE_TOKEN, title)
}

/// ファイルを読み込み、置換結果を書き戻す。
///
/// `optional` のときファイルが無ければ何もしない。
pub(super) fn rewrite_file(
    path: &Path,
    optional: bool,
    fill: impl FnOnce(&str) -> String,
) -> Result<(), CoreError> {
    if optional && !path.exists() {
        tracing::debug!(path = %path.display(), "任意ファイルが無いためスキップ");
        return Ok(());
    }
    let text = fs::read_to_string(path)
        .map_err(|e| CoreError::io("ドキュメントの読み込みに失敗", path, e))?;
    fs::write(path, fill(&text)).map_err(|e| CoreError::io("ドキュメントの書き込みに失敗", path, e))
}
