use std::fs;
use std::path::Path;

/// ディレクトリ名先頭の連番を取り出す。
///
/// 最初の `-` までのトークンの先頭にある数字を読む（`01-hello` → 1, `7x-foo` → 7）。
/// 数字で始まらない場合は None。
pub fn parse_sequence(dir_name: &str) -> Option<u32> {
    let token = dir_name.split('-').next().unwrap_or_default();
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// 連番を除いたスラッグ部分（`03-props-demo` → `props-demo`）。
pub fn slug_of(dir_name: &str) -> Option<&str> {
    let (prefix, slug) = dir_name.split_once('-')?;
    (!prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit())).then_some(slug)
}

/// `<2桁連番>-<slug>` 形式のディレクトリ名を組み立てる。
pub fn exercise_dir_name(sequence: u32, slug: &str) -> String {
    format!("{sequence:02}-{slug}")
}

/// トピック内の次の連番（既存最大値 + 1、無ければ 1）。
///
/// 読み込めない・存在しないトピックは空として扱う。`u32::MAX` で頭打ち。
pub fn next_sequence(topic_path: &Path) -> u32 {
    existing_names(topic_path)
        .iter()
        .filter_map(|name| parse_sequence(name))
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// 同じスラッグを持つ既存ディレクトリ名を探す。
pub fn find_slug(topic_path: &Path, slug: &str) -> Option<String> {
    existing_names(topic_path)
        .into_iter()
        .find(|name| slug_of(name) == Some(slug))
}

fn existing_names(topic_path: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(topic_path) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|e| e.file_name().to_str().map(ToString::to_string))
        .collect()
}
