use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use relearn_core::config::{CONFIG_FILE, LOCAL_CONFIG_FILE};
use relearn_core::{load_config, merge_config, CliConfig};

/// コマンド実行に必要な共通情報。
#[derive(Debug, Clone)]
pub struct AppContext {
    /// カリキュラムのルート（exercises/ と templates/ の親）
    pub root: PathBuf,
    pub config: CliConfig,
}

impl AppContext {
    /// ルートを決め、設定ファイルと上書き設定を読み込む。
    ///
    /// `--config` で明示したファイルが読めない場合はエラー。既定の設定ファイルが
    /// 壊れている場合は警告を出してデフォルト設定で続行する。
    ///
    /// # Errors
    /// カレントディレクトリが取得できない場合、または明示した設定ファイルの読み込みに失敗した場合。
    pub fn load(root: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().context("カレントディレクトリを取得できません")?,
        };

        let mut config = match config_path {
            Some(path) => load_config(path)
                .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
            None => load_config(&root.join(CONFIG_FILE)).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "設定ファイルの読み込みに失敗したためデフォルト設定を使用します");
                CliConfig::default()
            }),
        };
        if let Err(e) = merge_config(&mut config, &root.join(LOCAL_CONFIG_FILE)) {
            tracing::warn!(error = %e, "上書き設定を無視します");
        }

        tracing::debug!(root = %root.display(), ?config, "設定を読み込みました");
        Ok(Self { root, config })
    }

    pub fn exercises_root(&self) -> PathBuf {
        self.config.exercises_root(&self.root)
    }
}
