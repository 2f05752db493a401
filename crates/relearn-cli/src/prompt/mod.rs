#[cfg(test)]
pub mod scripted;

use std::io;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use relearn_core::commands::create::CreateRequest;
use relearn_core::{validate_slug, Difficulty, ExerciseRecord, ExerciseType};

/// 対話式プロンプトのテーマを取得する。
pub fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Ctrl+C による中断を None に変換する。
fn interrupted_as_none<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// 選択プロンプト。Ctrl+C / Esc で None を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn select_prompt(prompt: &str, items: &[&str]) -> Result<Option<usize>> {
    let selection = Select::with_theme(&theme())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// テキスト入力プロンプト（カスタムバリデーション付き）。Ctrl+C で None を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn input_with_validation<F>(prompt_text: &str, validator: F) -> Result<Option<String>>
where
    F: Fn(&String) -> Result<(), String> + Clone,
{
    interrupted_as_none(
        Input::with_theme(&theme())
            .with_prompt(prompt_text)
            .validate_with(validator)
            .interact_text(),
    )
}

/// テキスト入力プロンプト（既定値付き、空入力可）。Ctrl+C で None を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn input_with_default(prompt_text: &str, default: &str) -> Result<Option<String>> {
    interrupted_as_none(
        Input::with_theme(&theme())
            .with_prompt(prompt_text)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text(),
    )
}

/// 確認プロンプトの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// はい（実行する）
    Yes,
    /// いいえ（入力をやり直す）
    GoBack,
    /// キャンセル
    Cancel,
}

/// 確認プロンプト（はい / いいえ（入力をやり直す）/ キャンセル の3択）。
/// Ctrl+C / Esc の場合は Cancel を返す。
///
/// # Errors
///
/// プロンプトの入出力に失敗した場合にエラーを返す。
pub fn confirm_prompt() -> Result<ConfirmResult> {
    let items = &["はい", "いいえ（入力をやり直す）", "キャンセル"];
    let selection = select_prompt("この内容で作成しますか？", items)?;
    Ok(match selection {
        Some(0) => ConfirmResult::Yes,
        Some(1) => ConfirmResult::GoBack,
        _ => ConfirmResult::Cancel,
    })
}

/// メインメニューの選択肢。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Create,
    BatchCreate,
    Run,
    TestAll,
    Validate,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 6] = [
        MainMenuChoice::Create,
        MainMenuChoice::BatchCreate,
        MainMenuChoice::Run,
        MainMenuChoice::TestAll,
        MainMenuChoice::Validate,
        MainMenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenuChoice::Create => "演習を作成",
            MainMenuChoice::BatchCreate => "演習を一括作成",
            MainMenuChoice::Run => "演習を起動",
            MainMenuChoice::TestAll => "全演習をテスト",
            MainMenuChoice::Validate => "構成を検証",
            MainMenuChoice::Exit => "終了",
        }
    }
}

/// 演習の作成・起動で使う対話入力。
///
/// いずれのメソッドも、利用者が中断した場合は None を返す。
pub trait ExercisePrompt {
    fn select_main_menu(&self) -> Result<Option<MainMenuChoice>>;
    fn select_topic(&self, topics: &[String]) -> Result<Option<String>>;
    fn input_slug(&self) -> Result<Option<String>>;
    fn input_title(&self) -> Result<Option<String>>;
    fn select_type(&self) -> Result<Option<ExerciseType>>;
    fn select_difficulty(&self) -> Result<Option<Difficulty>>;
    fn input_time(&self, default: &str) -> Result<Option<String>>;
    fn confirm(&self, request: &CreateRequest) -> Result<ConfirmResult>;
    fn select_exercise(&self, exercises: &[ExerciseRecord]) -> Result<Option<usize>>;
}

/// dialoguer による実装。
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl ExercisePrompt for DialoguerPrompt {
    fn select_main_menu(&self) -> Result<Option<MainMenuChoice>> {
        let labels: Vec<&str> = MainMenuChoice::ALL.iter().map(|c| c.label()).collect();
        let idx = select_prompt("操作を選択してください", &labels)?;
        Ok(idx.map(|i| MainMenuChoice::ALL[i]))
    }

    fn select_topic(&self, topics: &[String]) -> Result<Option<String>> {
        let labels: Vec<&str> = topics.iter().map(String::as_str).collect();
        let idx = select_prompt("トピックを選択してください", &labels)?;
        Ok(idx.map(|i| topics[i].clone()))
    }

    fn input_slug(&self) -> Result<Option<String>> {
        input_with_validation("演習名（kebab-case）", |input: &String| validate_slug(input))
    }

    fn input_title(&self) -> Result<Option<String>> {
        input_with_default("演習タイトル", "")
    }

    fn select_type(&self) -> Result<Option<ExerciseType>> {
        let labels: Vec<&str> = ExerciseType::ALL.iter().map(|t| t.label()).collect();
        let idx = select_prompt("演習タイプを選択してください", &labels)?;
        Ok(idx.map(|i| ExerciseType::ALL[i]))
    }

    fn select_difficulty(&self) -> Result<Option<Difficulty>> {
        let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.label()).collect();
        let idx = select_prompt("難易度を選択してください", &labels)?;
        Ok(idx.map(|i| Difficulty::ALL[i]))
    }

    fn input_time(&self, default: &str) -> Result<Option<String>> {
        input_with_default("想定所要時間（例: 15-20 minutes）", default)
    }

    fn confirm(&self, _request: &CreateRequest) -> Result<ConfirmResult> {
        confirm_prompt()
    }

    fn select_exercise(&self, exercises: &[ExerciseRecord]) -> Result<Option<usize>> {
        let labels: Vec<String> = exercises
            .iter()
            .map(|e| {
                if e.difficulty.is_empty() {
                    e.full_name()
                } else {
                    format!("{} [{}]", e.full_name(), e.difficulty)
                }
            })
            .collect();
        let selection = Select::with_theme(&theme())
            .with_prompt("起動する演習を選択してください")
            .items(&labels)
            .default(0)
            .max_length(15)
            .interact_opt()?;
        Ok(selection)
    }
}
