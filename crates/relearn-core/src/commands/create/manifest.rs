use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::dependencies::lookup_dependency;
use crate::error::CoreError;

/// コピー済みの package.json を書き換える。
///
/// - `name` を `package_name` に置き換える
/// - 追加依存を依存関係表に従って dependencies / devDependencies に入れる
///
/// キーの順序は元ファイルのまま、2 スペースインデントで書き戻す。
///
/// # Errors
/// 読み書きに失敗した場合、または JSON オブジェクトとして解釈できない場合。
pub fn rewrite_manifest(
    manifest_path: &Path,
    package_name: &str,
    extra_dependencies: &[String],
) -> Result<(), CoreError> {
    let content = fs::read_to_string(manifest_path)
        .map_err(|e| CoreError::io("マニフェストの読み込みに失敗", manifest_path, e))?;
    let mut manifest: Value = serde_json::from_str(&content).map_err(|source| {
        CoreError::ManifestParse {
            path: manifest_path.to_path_buf(),
            source,
        }
    })?;

    apply_manifest_changes(&mut manifest, package_name, extra_dependencies);

    let mut rendered = serde_json::to_string_pretty(&manifest).map_err(|source| {
        CoreError::ManifestParse {
            path: manifest_path.to_path_buf(),
            source,
        }
    })?;
    rendered.push('\n');
    fs::write(manifest_path, rendered)
        .map_err(|e| CoreError::io("マニフェストの書き込みに失敗", manifest_path, e))
}

/// マニフェストの JSON 値に名前と追加依存を反映する。
///
/// ルートがオブジェクトでない場合は空オブジェクトに置き換える。
pub fn apply_manifest_changes(manifest: &mut Value, package_name: &str, extra_dependencies: &[String]) {
    if !manifest.is_object() {
        *manifest = Value::Object(Map::new());
    }
    let Value::Object(root) = manifest else {
        return;
    };

    root.insert("name".to_string(), Value::String(package_name.to_string()));

    for dependency in extra_dependencies {
        let pin = lookup_dependency(dependency);
        let section = root
            .entry(pin.section.key())
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        if let Value::Object(entries) = section {
            entries.insert(dependency.clone(), Value::String(pin.version.to_string()));
        }
    }
}
