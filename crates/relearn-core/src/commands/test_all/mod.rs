pub mod classify;
pub mod runner;

use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::config::{CliConfig, CommandSpec};
use crate::model::ExerciseRecord;
use crate::progress::ProgressEvent;

pub use classify::classify_output;
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};

/// 一括テストの実行オプション。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub command: CommandSpec,
    /// 同時実行数（1 で逐次実行）
    pub concurrency: usize,
    /// 演習 1 件あたりのタイムアウト
    pub timeout: Option<Duration>,
    pub failure_markers: Vec<String>,
}

impl RunOptions {
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            command: config.test_command.clone(),
            concurrency: config.effective_concurrency(),
            timeout: config.timeout(),
            failure_markers: config.failure_markers.clone(),
        }
    }
}

/// 1 件の実行がどう終わったか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// コマンドが終了した（合否は出力で判定）
    Completed,
    TimedOut,
    /// キャンセルにより未実行、または中断
    Cancelled,
    /// コマンドを起動できなかった
    SpawnFailed,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Completed => "完了",
            RunStatus::TimedOut => "タイムアウト",
            RunStatus::Cancelled => "キャンセル",
            RunStatus::SpawnFailed => "起動失敗",
        }
    }
}

/// 演習 1 件のテスト結果。
#[derive(Debug, Clone)]
pub struct TestRunReport {
    pub exercise: ExerciseRecord,
    pub status: RunStatus,
    pub passed: bool,
    pub output: String,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl TestRunReport {
    fn new(exercise: &ExerciseRecord, status: RunStatus) -> Self {
        Self {
            exercise: exercise.clone(),
            status,
            passed: false,
            output: String::new(),
            exit_code: None,
            duration: Duration::ZERO,
        }
    }
}

/// 一括テストの集計。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    /// 失敗した演習の `topic/name`（カタログ順）
    pub failing: Vec<String>,
}

impl TestSummary {
    pub fn from_reports(reports: &[TestRunReport]) -> Self {
        let failing: Vec<String> = reports
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.exercise.full_name())
            .collect();
        Self {
            passed: reports.len() - failing.len(),
            failed: failing.len(),
            total: reports.len(),
            failing,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// 全演習のテストを実行する。
///
/// 最大 `concurrency` 件を同時に実行し、結果は入力（カタログ）の順で返す。
/// `cancel` がキャンセルされると実行中のコマンドを中断し、未着手の演習は
/// `Cancelled` として記録する。
pub async fn run_all<R>(
    exercises: &[ExerciseRecord],
    runner: &R,
    options: &RunOptions,
    cancel: &CancellationToken,
    on_progress: impl Fn(ProgressEvent),
) -> Vec<TestRunReport>
where
    R: CommandRunner + ?Sized,
{
    let total = exercises.len();
    let on_progress = &on_progress;

    let reports: Vec<TestRunReport> = stream::iter(exercises.iter().enumerate())
        .map(|(index, exercise)| {
            run_one(index + 1, total, exercise, runner, options, cancel, on_progress)
        })
        .buffered(options.concurrency.max(1))
        .collect()
        .await;

    let summary = TestSummary::from_reports(&reports);
    on_progress(ProgressEvent::Finished {
        success: summary.is_success(),
        message: format!(
            "合格 {} 件 / 失敗 {} 件 / 全 {} 件",
            summary.passed, summary.failed, summary.total
        ),
    });
    reports
}

async fn run_one<R>(
    step: usize,
    total: usize,
    exercise: &ExerciseRecord,
    runner: &R,
    options: &RunOptions,
    cancel: &CancellationToken,
    on_progress: &impl Fn(ProgressEvent),
) -> TestRunReport
where
    R: CommandRunner + ?Sized,
{
    let target = exercise.full_name();
    if cancel.is_cancelled() {
        on_progress(ProgressEvent::Skipped {
            target,
            reason: RunStatus::Cancelled.label().to_string(),
        });
        return TestRunReport::new(exercise, RunStatus::Cancelled);
    }

    on_progress(ProgressEvent::Started {
        step,
        total,
        target: target.clone(),
    });
    let started = Instant::now();

    let execution = async {
        let run = runner.run(&options.command, &exercise.path);
        match options.timeout {
            Some(limit) => tokio::time::timeout(limit, run).await.ok(),
            None => Some(run.await),
        }
    };
    let outcome = tokio::select! {
        () = cancel.cancelled() => None,
        result = execution => Some(result),
    };

    let mut report = match outcome {
        None => TestRunReport::new(exercise, RunStatus::Cancelled),
        Some(None) => TestRunReport::new(exercise, RunStatus::TimedOut),
        Some(Some(Err(e))) => {
            let mut report = TestRunReport::new(exercise, RunStatus::SpawnFailed);
            report.output = format!("{} を起動できません: {e}", options.command.program);
            report
        }
        Some(Some(Ok(out))) => TestRunReport {
            passed: classify_output(&out.output, &options.failure_markers),
            output: out.output,
            exit_code: out.exit_code,
            ..TestRunReport::new(exercise, RunStatus::Completed)
        },
    };
    report.duration = started.elapsed();
    tracing::debug!(
        exercise = %target,
        status = report.status.label(),
        exit_code = ?report.exit_code,
        passed = report.passed,
        "テスト完了"
    );

    if report.passed {
        on_progress(ProgressEvent::Succeeded { step, total, target });
    } else {
        let detail = match report.status {
            RunStatus::Completed | RunStatus::SpawnFailed => report.output.clone(),
            status => status.label().to_string(),
        };
        on_progress(ProgressEvent::Failed {
            step,
            total,
            target,
            detail,
        });
    }
    report
}
