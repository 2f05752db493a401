// relearn-cli: 対話メニューとサブコマンドから relearn-core の操作を呼び出す

pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;
pub mod prompt;
pub mod ui;
