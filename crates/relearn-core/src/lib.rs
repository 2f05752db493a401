// relearn-core: CLI から利用する演習カリキュラム操作のビジネスロジック

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod validation;

pub use catalog::{find_exercise, scan_exercises, with_manifest};
pub use config::{load_config, merge_config, CliConfig, CommandSpec};
pub use error::CoreError;
pub use model::{Difficulty, ExerciseRecord, ExerciseType};
pub use progress::ProgressEvent;
pub use validation::{validate_slug, validate_topic};
