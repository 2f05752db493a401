use std::path::Path;

use anyhow::Result;
use console::{style, Color};

use relearn_core::commands::batch::{create_batch, load_batch_file};

use crate::context::AppContext;
use crate::ui;

/// 一括生成コマンド。
///
/// 項目ごとの失敗は集計に載せるだけで、終了コードは 0 のまま。
///
/// # Errors
///
/// 一括生成リストを読み込めない場合にエラーを返す。
pub fn run(ctx: &AppContext, file: Option<&Path>) -> Result<i32> {
    let path = file.map_or_else(|| ctx.config.batch_path(&ctx.root), Path::to_path_buf);
    let entries = load_batch_file(&path)?;

    ui::render_banner(&format!("React 演習の一括作成（{} 件）", entries.len()));
    let summary = create_batch(&ctx.root, &ctx.config, &entries, |event| {
        ui::print_event(&event);
    });

    println!("\n{}", style("集計:").blue().bold());
    ui::print_count("作成", summary.created.len(), Color::Green);
    if !summary.skipped.is_empty() {
        ui::print_count("スキップ（既存）", summary.skipped.len(), Color::Yellow);
    }
    if !summary.failed.is_empty() {
        ui::print_count("失敗", summary.failed.len(), Color::Red);
        for (name, error) in &summary.failed {
            println!("    {}", style(format!("- {name}: {error}")).red());
        }
    }

    println!("\n{}", style("次の手順:").blue());
    println!(
        "{}",
        ui::format_detail(
            "1. 各演習ディレクトリを確認する\n2. src/App.tsx に課題のコードを書く\n3. src/App.test.tsx にテストを書く\n4. README.md と SOLUTION.md を仕上げる"
        )
    );
    Ok(0)
}
