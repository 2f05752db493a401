pub mod batch_create;
pub mod completions;
pub mod create;
pub mod run;
pub mod test_all;
pub mod validate;
