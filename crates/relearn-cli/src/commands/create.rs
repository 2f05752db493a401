use anyhow::{anyhow, bail, Context, Result};
use console::style;

use relearn_core::commands::create::{create_exercise, CreateRequest};
use relearn_core::{validate_slug, validate_topic, CliConfig, Difficulty, ExerciseType};

use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::prompt::{ConfirmResult, ExercisePrompt};
use crate::ui;

/// 想定所要時間の既定値。
pub const DEFAULT_TIME: &str = "15-20 minutes";

/// 演習作成コマンド。
///
/// コマンドラインで指定されなかった値だけを対話で尋ね、確認後に生成する。
/// 中断した場合は何も作らずに終了コード 0 を返す。
///
/// # Errors
///
/// 入力値が不正な場合、または生成に失敗した場合にエラーを返す。
pub fn run(ctx: &AppContext, args: &CreateArgs, prompt: &dyn ExercisePrompt) -> Result<i32> {
    ui::render_banner("React 演習の作成");

    let Some(request) = resolve_request(args, &ctx.config, prompt)? else {
        println!("{}", ui::format_warning("演習の作成をキャンセルしました"));
        return Ok(0);
    };

    let created = create_exercise(&ctx.root, &ctx.config, &request, |event| {
        ui::print_event(&event);
    })
    .with_context(|| {
        format!(
            "演習 {}/{} を作成できませんでした",
            request.topic, request.slug
        )
    })?;

    println!(
        "\n{}",
        ui::format_success(&format!("作成しました: {}/{}", request.topic, created.name))
    );
    println!("  {} {}", style("場所:").dim(), created.path.display());
    println!("  {} {}", style("パッケージ:").dim(), created.package_name);
    println!("\n{}", style("次の手順:").blue());
    println!("{}", ui::format_detail("1. src/App.tsx に課題のコードを書く\n2. src/App.test.tsx にテストを書く\n3. README.md に手順を書く"));
    Ok(0)
}

/// フラグと対話入力から作成内容を決める。
///
/// `--yes` のときは対話せず、未指定の値は既定値で補う（`--topic` と `--slug` は必須）。
/// `--topic` は設定の `topics` に含まれるものだけを受け付ける。
/// 利用者が中断した場合は None。
///
/// # Errors
///
/// フラグの値が不正な場合、またはプロンプトの入出力に失敗した場合にエラーを返す。
pub fn resolve_request(
    args: &CreateArgs,
    config: &CliConfig,
    prompt: &dyn ExercisePrompt,
) -> Result<Option<CreateRequest>> {
    if let Some(topic) = &args.topic {
        validate_topic(topic).map_err(|reason| anyhow!("トピックが不正です: '{topic}' ({reason})"))?;
        if !config.topics.contains(topic) {
            bail!(
                "トピック '{topic}' は設定されていません（選択肢: {}）",
                config.topics.join(", ")
            );
        }
    }
    if let Some(slug) = &args.slug {
        validate_slug(slug).map_err(|reason| anyhow!("スラッグが不正です: '{slug}' ({reason})"))?;
    }
    let exercise_type = args
        .exercise_type
        .as_deref()
        .map(str::parse::<ExerciseType>)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let difficulty = args
        .difficulty
        .as_deref()
        .map(str::parse::<Difficulty>)
        .transpose()
        .map_err(|e| anyhow!(e))?;

    if args.yes {
        let (Some(topic), Some(slug)) = (&args.topic, &args.slug) else {
            bail!("--yes を指定する場合は --topic と --slug が必要です");
        };
        return Ok(Some(CreateRequest {
            topic: topic.clone(),
            slug: slug.clone(),
            title: args.title.clone().unwrap_or_default(),
            exercise_type: exercise_type.unwrap_or(ExerciseType::ALL[0]),
            difficulty: difficulty.unwrap_or(Difficulty::ALL[0]),
            estimated_time: args.time.clone().unwrap_or_else(|| DEFAULT_TIME.to_string()),
            dependencies: args.deps.clone(),
        }));
    }

    loop {
        let Some(topic) = answer(args.topic.clone(), || prompt.select_topic(&config.topics))? else {
            return Ok(None);
        };
        let Some(slug) = answer(args.slug.clone(), || prompt.input_slug())? else {
            return Ok(None);
        };
        let Some(title) = answer(args.title.clone(), || prompt.input_title())? else {
            return Ok(None);
        };
        let Some(exercise_type) = answer(exercise_type, || prompt.select_type())? else {
            return Ok(None);
        };
        let Some(difficulty) = answer(difficulty, || prompt.select_difficulty())? else {
            return Ok(None);
        };
        let Some(estimated_time) = answer(args.time.clone(), || prompt.input_time(DEFAULT_TIME))?
        else {
            return Ok(None);
        };

        let request = CreateRequest {
            topic,
            slug,
            title,
            exercise_type,
            difficulty,
            estimated_time,
            dependencies: args.deps.clone(),
        };
        print_confirmation(&request);
        match prompt.confirm(&request)? {
            ConfirmResult::Yes => return Ok(Some(request)),
            ConfirmResult::GoBack => {}
            ConfirmResult::Cancel => return Ok(None),
        }
    }
}

/// 指定済みの値があればそれを、無ければ対話で得る。
fn answer<T>(given: Option<T>, ask: impl FnOnce() -> Result<Option<T>>) -> Result<Option<T>> {
    match given {
        Some(value) => Ok(Some(value)),
        None => ask(),
    }
}

fn print_confirmation(request: &CreateRequest) {
    println!("\n[確認] 以下の内容で演習を作成します。");
    println!("    トピック:   {}", request.topic);
    println!("    スラッグ:   {}", request.slug);
    println!("    タイトル:   {}", request.display_title());
    println!("    タイプ:     {}", request.exercise_type.label());
    println!("    難易度:     {}", request.difficulty.label());
    println!("    所要時間:   {}", request.estimated_time);
    if !request.dependencies.is_empty() {
        println!("    追加依存:   {}", request.dependencies.join(", "));
    }
}
