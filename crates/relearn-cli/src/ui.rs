use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use relearn_core::ProgressEvent;

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), style(message).green())
}

pub fn format_failure(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("!").yellow(), style(message).yellow())
}

pub fn format_detail(message: &str) -> String {
    message
        .lines()
        .map(|line| format!("    {}", style(line).dim()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_banner(title: &str) {
    let line = style("━".repeat(40)).cyan();
    println!("{line}");
    println!("  {}", style(title).cyan().bold());
    println!("{line}");
}

/// 1 件ずつ進む操作（生成・一括生成）の進捗を表示する。
pub fn print_event(event: &ProgressEvent) {
    match event {
        ProgressEvent::Started {
            step,
            total,
            target,
        } => println!("  {} {target}", style(format!("[{step}/{total}]")).dim()),
        ProgressEvent::Succeeded { target, .. } => println!("{}", format_success(target)),
        ProgressEvent::Failed { target, detail, .. } => {
            println!("{}", format_failure(target));
            println!("{}", format_detail(detail));
        }
        ProgressEvent::Skipped { target, reason } => {
            println!("{}", format_warning(&format!("スキップ: {target}")));
            println!("{}", format_detail(reason));
        }
        ProgressEvent::Log { message } => println!("  {}", style(message).cyan()),
        ProgressEvent::Warning { message } => println!("{}", format_warning(message)),
        ProgressEvent::Finished { success, message } => {
            let text = if *success {
                format_success(message)
            } else {
                format_failure(message)
            };
            println!("\n{text}");
        }
    }
}

/// 件数の集計行を表示する。
pub fn print_count(label: &str, count: usize, color: console::Color) {
    println!(
        "  {:<16} {}",
        label,
        style(count.to_string()).fg(color).bold()
    );
}

/// 一括テスト用の進捗バー。
///
/// 端末でない場合は描画されないが、`println` で渡した行は常に出力する。
pub struct TestProgress {
    bar: ProgressBar,
}

impl TestProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Self { bar }
    }

    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    pub fn handle(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { target, .. } => {
                self.bar.set_message(target.clone());
                self.println(&format!("\n{} {}", style("▶").blue(), style(target).bold()));
            }
            ProgressEvent::Succeeded { target, .. } => {
                self.bar.inc(1);
                self.println(&format!("  {}", format_success(&format!("{target} - テスト合格"))));
            }
            ProgressEvent::Failed { target, detail, .. } => {
                self.bar.inc(1);
                self.println(&format!("  {}", format_failure(&format!("{target} - テスト失敗"))));
                if !detail.trim().is_empty() {
                    self.println(&format_detail(detail.trim_end()));
                }
            }
            ProgressEvent::Skipped { target, reason } => {
                self.bar.inc(1);
                self.println(&format!("  {}", format_warning(&format!("{target} - {reason}"))));
            }
            ProgressEvent::Log { message } | ProgressEvent::Warning { message } => {
                self.println(&format!("  {message}"));
            }
            ProgressEvent::Finished { .. } => self.bar.finish_and_clear(),
        }
    }
}
