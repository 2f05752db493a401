use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// シェル補完スクリプトを標準出力に書き出す。
pub fn run(shell: Shell) -> i32 {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
    0
}
