use std::time::Duration;

use anyhow::{Context, Result};
use console::{style, Color};
use tokio_util::sync::CancellationToken;

use relearn_core::commands::test_all::{run_all, ProcessRunner, RunOptions, TestSummary};
use relearn_core::{scan_exercises, with_manifest};

use crate::context::AppContext;
use crate::ui::{self, TestProgress};

/// `test-all` のコマンドライン上書き。
#[derive(Debug, Clone, Copy, Default)]
pub struct TestAllArgs {
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
}

/// 設定とコマンドライン指定から実行オプションを組み立てる。
pub fn build_options(ctx: &AppContext, args: TestAllArgs) -> RunOptions {
    let mut options = RunOptions::from_config(&ctx.config);
    if let Some(concurrency) = args.concurrency {
        options.concurrency = concurrency.max(1);
    }
    if let Some(secs) = args.timeout_secs {
        options.timeout = Some(Duration::from_secs(secs));
    }
    options
}

/// マニフェストを持つ全演習のテストを実行する。失敗が 1 件でもあれば終了コード 1。
///
/// # Errors
///
/// 非同期ランタイムを起動できない場合にエラーを返す。
pub fn run(ctx: &AppContext, args: TestAllArgs, cancel: &CancellationToken) -> Result<i32> {
    ui::render_banner("全演習のテスト実行");

    let exercises = with_manifest(scan_exercises(&ctx.exercises_root()));
    if exercises.is_empty() {
        println!("{}", ui::format_warning("テスト対象の演習がありません"));
        return Ok(0);
    }

    let options = build_options(ctx, args);
    tracing::info!(
        count = exercises.len(),
        concurrency = options.concurrency,
        timeout = ?options.timeout,
        command = %options.command.display(),
        "一括テストを開始"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("非同期ランタイムを起動できません")?;

    let progress = TestProgress::new(exercises.len());
    let reports = runtime.block_on(run_all(
        &exercises,
        &ProcessRunner,
        &options,
        cancel,
        |event| progress.handle(&event),
    ));

    let summary = TestSummary::from_reports(&reports);
    println!("\n{}", style("集計:").blue().bold());
    ui::print_count("合格", summary.passed, Color::Green);
    ui::print_count("失敗", summary.failed, Color::Red);
    ui::print_count("全演習", summary.total, Color::Cyan);

    if cancel.is_cancelled() {
        println!("\n{}", ui::format_warning("中断されたため未実行の演習があります"));
    }

    if summary.is_success() {
        println!("\n{}", ui::format_success("すべてのテストに合格しました"));
        Ok(0)
    } else {
        println!("\n{}", style("失敗した演習:").red().bold());
        for name in &summary.failing {
            println!("    {}", style(format!("- {name}")).red());
        }
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("relearn.yaml"), "concurrency: 3\ntimeout_secs: 60\n").unwrap();
        let ctx = AppContext::load(Some(tmp.path()), None).unwrap();

        let options = build_options(&ctx, TestAllArgs::default());
        assert_eq!(options.concurrency, 3);
        assert_eq!(options.timeout, Some(Duration::from_secs(60)));

        let options = build_options(
            &ctx,
            TestAllArgs {
                concurrency: Some(0),
                timeout_secs: Some(5),
            },
        );
        assert_eq!(options.concurrency, 1);
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_no_exercises_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let ctx = AppContext::load(Some(tmp.path()), None).unwrap();
        assert_eq!(run(&ctx, TestAllArgs::default(), &CancellationToken::new()).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_marker_sets_exit_code() {
        let tmp = TempDir::new().unwrap();
        for name in ["01-pass", "02-fail"] {
            let dir = tmp.path().join("exercises/01-fundamentals").join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("package.json"), "{}").unwrap();
        }
        fs::write(
            tmp.path().join("exercises/01-fundamentals/02-fail/out.txt"),
            "FAIL src/App.test.tsx",
        )
        .unwrap();
        fs::write(
            tmp.path().join("relearn.yaml"),
            "test_command:\n  program: sh\n  args: [\"-c\", \"cat out.txt 2>/dev/null; true\"]\n",
        )
        .unwrap();
        let ctx = AppContext::load(Some(tmp.path()), None).unwrap();

        assert_eq!(run(&ctx, TestAllArgs::default(), &CancellationToken::new()).unwrap(), 1);

        fs::remove_file(tmp.path().join("exercises/01-fundamentals/02-fail/out.txt")).unwrap();
        assert_eq!(run(&ctx, TestAllArgs::default(), &CancellationToken::new()).unwrap(), 0);
    }
}
