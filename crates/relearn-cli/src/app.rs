use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::cli::{Cli, Commands, CreateArgs};
use crate::commands;
use crate::commands::test_all::TestAllArgs;
use crate::context::AppContext;
use crate::prompt::{ExercisePrompt, MainMenuChoice};
use crate::ui;

/// コマンドを実行し、プロセスの終了コードを返す。
///
/// サブコマンドが無い場合はメインメニューを表示する。
///
/// # Errors
///
/// 設定の読み込み、または選択したコマンドが失敗した場合にエラーを返す。
pub fn run(cli: Cli, prompt: &dyn ExercisePrompt, cancel: &CancellationToken) -> Result<i32> {
    if let Some(Commands::Completions { shell }) = cli.command {
        return Ok(commands::completions::run(shell));
    }

    let ctx = AppContext::load(cli.root.as_deref(), cli.config.as_deref())?;
    match cli.command {
        Some(command) => dispatch(&ctx, command, prompt, cancel),
        None => main_menu(&ctx, prompt, cancel),
    }
}

fn dispatch(
    ctx: &AppContext,
    command: Commands,
    prompt: &dyn ExercisePrompt,
    cancel: &CancellationToken,
) -> Result<i32> {
    match command {
        Commands::Create(args) => commands::create::run(ctx, &args, prompt),
        Commands::BatchCreate { file } => commands::batch_create::run(ctx, file.as_deref()),
        Commands::Run { exercise } => commands::run::run(ctx, exercise.as_deref(), prompt),
        Commands::TestAll {
            concurrency,
            timeout,
        } => commands::test_all::run(
            ctx,
            TestAllArgs {
                concurrency,
                timeout_secs: timeout,
            },
            cancel,
        ),
        Commands::Validate => Ok(commands::validate::run(ctx)),
        Commands::Completions { shell } => Ok(commands::completions::run(shell)),
    }
}

/// メインメニュー。終了を選ぶまで繰り返し、最後に実行したコマンドの終了コードを返す。
///
/// メニューから実行したコマンドのエラーは表示してメニューに戻る。
fn main_menu(ctx: &AppContext, prompt: &dyn ExercisePrompt, cancel: &CancellationToken) -> Result<i32> {
    ui::render_banner("relearn - React 演習カリキュラムツール");
    let mut last_code = 0;

    loop {
        let command = match prompt.select_main_menu()? {
            None | Some(MainMenuChoice::Exit) => {
                println!("終了します。");
                return Ok(last_code);
            }
            Some(MainMenuChoice::Create) => Commands::Create(CreateArgs::default()),
            Some(MainMenuChoice::BatchCreate) => Commands::BatchCreate { file: None },
            Some(MainMenuChoice::Run) => Commands::Run { exercise: None },
            Some(MainMenuChoice::TestAll) => Commands::TestAll {
                concurrency: None,
                timeout: None,
            },
            Some(MainMenuChoice::Validate) => Commands::Validate,
        };

        last_code = match dispatch(ctx, command, prompt, cancel) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{}", ui::format_failure(&format!("{e:#}")));
                1
            }
        };
        if cancel.is_cancelled() {
            return Ok(last_code);
        }
        println!();
    }
}
