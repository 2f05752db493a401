use anyhow::{anyhow, Result};
use console::style;

use relearn_core::commands::run::run_dev_server;
use relearn_core::{find_exercise, scan_exercises};

use crate::context::AppContext;
use crate::prompt::ExercisePrompt;
use crate::ui;

/// 演習を選んで開発サーバーを起動する。
///
/// 戻り値は開発サーバーの終了コード。対話選択で演習が無い場合や選択を中断した場合は 0。
///
/// # Errors
///
/// 指定した演習が見つからない場合、またはコマンドを起動できない場合にエラーを返す。
pub fn run(ctx: &AppContext, exercise: Option<&str>, prompt: &dyn ExercisePrompt) -> Result<i32> {
    ui::render_banner("React 演習の起動");

    let exercises = scan_exercises(&ctx.exercises_root());
    if exercise.is_none() && exercises.is_empty() {
        println!(
            "{}",
            ui::format_warning("演習がありません。relearn create で作成してください")
        );
        return Ok(0);
    }

    let selected = match exercise {
        Some(name) => find_exercise(&exercises, name)
            .ok_or_else(|| anyhow!("演習が見つかりません: {name}"))?,
        None => match prompt.select_exercise(&exercises)? {
            Some(index) => &exercises[index],
            None => {
                println!("{}", ui::format_warning("演習が選択されませんでした"));
                return Ok(0);
            }
        },
    };

    println!(
        "\n{}",
        ui::format_success(&format!("起動します: {}", selected.full_name()))
    );
    println!("  {} {}", style("場所:").dim(), selected.path.display());
    println!(
        "  {} {}\n",
        style("コマンド:").dim(),
        ctx.config.dev_command.display()
    );

    let code = run_dev_server(selected, &ctx.config.dev_command)?;
    if code != 0 {
        println!(
            "\n{}",
            ui::format_failure(&format!("開発サーバーが終了しました（終了コード {code}）"))
        );
    }
    Ok(code)
}
