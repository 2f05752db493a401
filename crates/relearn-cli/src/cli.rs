use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "relearn",
    version,
    about = "React 演習カリキュラムの雛形生成・一括テスト・構成検証ツール"
)]
pub struct Cli {
    /// カリキュラムのルートディレクトリ（既定: カレントディレクトリ）
    #[arg(long, global = true, env = "RELEARN_ROOT")]
    pub root: Option<PathBuf>,

    /// 設定ファイル（既定: <root>/relearn.yaml）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 診断ログを詳細に出す
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// 診断ログをエラーのみにする
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// テンプレートから演習を 1 件生成する
    Create(CreateArgs),
    /// 一括生成リストに従って演習を生成する
    BatchCreate {
        /// 一括生成リスト（既定: 設定の batch_file）
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// 演習を選んで開発サーバーを起動する
    Run {
        /// 対象の演習（topic/name）
        #[arg(short, long)]
        exercise: Option<String>,
    },
    /// すべての演習のテストを実行する
    TestAll {
        /// 同時実行数
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,
        /// 演習 1 件あたりのタイムアウト（秒）
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// すべての演習の構成を検証する
    Validate,
    /// シェル補完スクリプトを出力する
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct CreateArgs {
    /// トピック（例: 01-fundamentals）
    #[arg(long)]
    pub topic: Option<String>,

    /// スラッグ（英小文字・数字・ハイフン）
    #[arg(long)]
    pub slug: Option<String>,

    /// 演習タイトル
    #[arg(long)]
    pub title: Option<String>,

    /// 演習タイプ（fix-broken, complete-missing, build-from-scratch）
    #[arg(long = "type")]
    pub exercise_type: Option<String>,

    /// 難易度（beginner, intermediate, advanced）
    #[arg(long)]
    pub difficulty: Option<String>,

    /// 想定所要時間
    #[arg(long)]
    pub time: Option<String>,

    /// 追加する依存パッケージ（複数指定可）
    #[arg(long = "dep")]
    pub deps: Vec<String>,

    /// 確認を省略し、未指定の値は既定値を使う
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}
