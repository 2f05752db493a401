use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;

use crate::config::CommandSpec;

/// 外部コマンドの実行結果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 標準出力の後ろに標準エラー出力を連結したもの
    pub output: String,
    /// シグナル終了の場合は None
    pub exit_code: Option<i32>,
}

/// 演習ディレクトリでコマンドを実行する抽象。
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// `cwd` を作業ディレクトリとして `command` を実行し、終了まで待つ。
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> std::io::Result<CommandOutput>;
}

/// 子プロセスとして実行するランナー。
///
/// 標準入力は閉じ、future が破棄された場合は子プロセスを kill する。
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> std::io::Result<CommandOutput> {
        tracing::debug!(command = %command.display(), cwd = %cwd.display(), "コマンドを実行");
        let output = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CommandOutput {
            output: text,
            exit_code: output.status.code(),
        })
    }
}
