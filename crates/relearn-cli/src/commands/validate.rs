use console::{style, Color};

use relearn_core::commands::validate::{validate_all, ValidationSummary};
use relearn_core::scan_exercises;

use crate::context::AppContext;
use crate::ui;

/// 全演習の構成を検証する。問題のある演習が 1 件でもあれば終了コード 1。
pub fn run(ctx: &AppContext) -> i32 {
    ui::render_banner("演習の構成検証");

    let exercises = scan_exercises(&ctx.exercises_root());
    let reports = validate_all(&exercises);

    for report in &reports {
        let name = report.exercise.full_name();
        if report.is_valid() {
            println!("{}", ui::format_success(&name));
        } else {
            println!("{}", ui::format_failure(&name));
            for issue in &report.issues {
                println!("    {}", style(format!("- {issue}")).red());
            }
        }
    }

    let summary = ValidationSummary::from_reports(&reports);
    println!("\n{}", style("集計:").blue().bold());
    ui::print_count("全演習", summary.total, Color::Cyan);
    ui::print_count("問題なし", summary.valid, Color::Green);
    if summary.with_issues > 0 {
        ui::print_count("問題あり", summary.with_issues, Color::Red);
    }

    if summary.is_success() {
        println!("\n{}", ui::format_success("すべての演習が有効です"));
        0
    } else {
        1
    }
}
