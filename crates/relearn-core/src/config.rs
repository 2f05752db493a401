use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// カリキュラムルートに置く設定ファイル名。
pub const CONFIG_FILE: &str = "relearn.yaml";
/// 個人環境向けの上書き設定ファイル名。
pub const LOCAL_CONFIG_FILE: &str = "relearn.local.yaml";

/// 外部コマンド（プログラム + 引数）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// 表示用のコマンドライン文字列。
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// CLI 全体の設定を保持する構造体。
///
/// カリキュラムルートの設定ファイル (relearn.yaml) から読み込む。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// 演習ディレクトリ（`<topic>/<NN-slug>/` の親）
    pub exercises_dir: String,
    /// テンプレートディレクトリ（`<type>/` の親）
    pub templates_dir: String,
    /// package.json の name に付ける名前空間
    pub package_scope: String,
    /// 対話生成で選択できるトピック
    pub topics: Vec<String>,
    /// 演習ごとのテストコマンド
    pub test_command: CommandSpec,
    /// 演習ごとの開発サーバー起動コマンド
    pub dev_command: CommandSpec,
    /// 出力に含まれていたら失敗とみなす文字列
    pub failure_markers: Vec<String>,
    /// 一括テストの同時実行数
    pub concurrency: usize,
    /// 演習 1 件あたりのテストのタイムアウト（秒）
    pub timeout_secs: Option<u64>,
    /// 一括生成リストのパス
    pub batch_file: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            exercises_dir: "exercises".to_string(),
            templates_dir: "templates".to_string(),
            package_scope: "@react-learning".to_string(),
            topics: [
                "01-fundamentals",
                "02-hooks",
                "03-styling",
                "04-state-patterns",
                "05-performance",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            test_command: CommandSpec::new("pnpm", &["test"]),
            dev_command: CommandSpec::new("pnpm", &["dev"]),
            failure_markers: vec!["FAIL".to_string(), "\u{2717}".to_string()],
            concurrency: 1,
            timeout_secs: None,
            batch_file: "batch-exercises.yaml".to_string(),
        }
    }
}

impl CliConfig {
    pub fn exercises_root(&self, root: &Path) -> PathBuf {
        root.join(&self.exercises_dir)
    }

    pub fn templates_root(&self, root: &Path) -> PathBuf {
        root.join(&self.templates_dir)
    }

    pub fn batch_path(&self, root: &Path) -> PathBuf {
        root.join(&self.batch_file)
    }

    /// 0 が設定されていても 1 並列として扱う。
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 設定ファイルを読み込む。
///
/// ファイルが存在しない場合はデフォルト値を返す。
///
/// # Errors
/// ファイルの読み込み、または YAML のパースに失敗した場合。
pub fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "設定ファイルが無いためデフォルト設定を使用");
        return Ok(CliConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("設定ファイルの読み込みに失敗: {}: {e}", path.display()))?;
    let config: CliConfig = serde_yaml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("設定ファイルのパースに失敗: {}: {e}", path.display()))?;
    Ok(config)
}

/// 上書き設定をマージする。
///
/// 上書きファイルに書かれたキーだけをベース設定に反映する。
/// ファイルが存在しない場合は何もしない。
///
/// # Errors
/// ファイルの読み込み、または YAML のパースに失敗した場合。
pub fn merge_config(base: &mut CliConfig, override_path: &Path) -> anyhow::Result<()> {
    if !override_path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(override_path).map_err(|e| {
        anyhow::anyhow!("上書き設定の読み込みに失敗: {}: {e}", override_path.display())
    })?;
    let overrides: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
        anyhow::anyhow!("上書き設定のパースに失敗: {}: {e}", override_path.display())
    })?;

    let serde_yaml::Value::Mapping(overrides) = overrides else {
        return Ok(());
    };

    let mut merged = serde_yaml::to_value(&*base)?;
    if let serde_yaml::Value::Mapping(map) = &mut merged {
        for (key, value) in overrides {
            map.insert(key, value);
        }
    }
    *base = serde_yaml::from_value(merged)
        .map_err(|e| anyhow::anyhow!("上書き設定の値が不正です: {e}"))?;
    Ok(())
}
