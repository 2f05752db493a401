use std::path::{Component, Path};

use once_cell::sync::Lazy;
use regex::Regex;

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static slug pattern"));

/// スラッグバリデーション: 英小文字・数字・ハイフンのみ。
///
/// dialoguer の `validate_with` にそのまま渡せるよう `String` のエラーを返す。
///
/// # Errors
/// スラッグが空、または許可されない文字を含む場合。
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if SLUG_PATTERN.is_match(slug) {
        Ok(())
    } else {
        Err("英小文字・数字・ハイフンのみ使用できます".into())
    }
}

/// トピック名バリデーション: 演習ルート直下の 1 階層だけを指す名前であること。
///
/// # Errors
/// 空、隠し名、`..` や絶対パス、区切り文字を含む場合。
pub fn validate_topic(topic: &str) -> Result<(), String> {
    if topic.is_empty() || topic.starts_with('.') || topic.contains(['/', '\\']) {
        return Err("演習ディレクトリ直下の 1 階層の名前を指定してください".into());
    }
    let mut components = Path::new(topic).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err("演習ディレクトリ直下の 1 階層の名前を指定してください".into()),
    }
}
