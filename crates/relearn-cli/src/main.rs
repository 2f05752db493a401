use clap::Parser;
use console::style;
use tokio_util::sync::CancellationToken;

use relearn_cli::app;
use relearn_cli::cli::Cli;
use relearn_cli::logging;
use relearn_cli::prompt::DialoguerPrompt;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let cancel = CancellationToken::new();
    ctrlc_handler(&cancel);

    let code = match app::run(cli, &DialoguerPrompt, &cancel) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("エラー:").red().bold());
            1
        }
    };
    std::process::exit(code);
}

/// Ctrl+C のグローバルハンドラを設定する。
///
/// 1 回目は実行中の一括テストをキャンセルし、2 回目で即座に終了する。
/// 対話プロンプト中の Ctrl+C は dialoguer 側で中断として扱われる。
fn ctrlc_handler(cancel: &CancellationToken) {
    let cancel = cancel.clone();
    let result = ctrlc::set_handler(move || {
        if cancel.is_cancelled() {
            std::process::exit(130);
        }
        eprintln!("\n{}", style("中断しています… もう一度 Ctrl+C で強制終了します").yellow());
        cancel.cancel();
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "Ctrl+C ハンドラを設定できません");
    }
}
