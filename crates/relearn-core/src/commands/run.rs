use std::process::Command;

use crate::config::CommandSpec;
use crate::error::CoreError;
use crate::model::ExerciseRecord;

/// 演習ディレクトリで開発サーバーを起動し、終了まで待つ。
///
/// 標準入出力は親プロセスのものを引き継ぐ。戻り値は子プロセスの終了コードで、
/// シグナルで終了した場合は 1。
///
/// # Errors
/// コマンドを起動できなかった場合。
pub fn run_dev_server(exercise: &ExerciseRecord, command: &CommandSpec) -> Result<i32, CoreError> {
    tracing::info!(
        exercise = %exercise.full_name(),
        command = %command.display(),
        "開発サーバーを起動"
    );
    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(&exercise.path)
        .status()
        .map_err(|e| CoreError::io("コマンドの起動に失敗", &exercise.path, e))?;

    let code = status.code().unwrap_or(1);
    tracing::debug!(code, "開発サーバーが終了");
    Ok(code)
}
