pub mod batch;
pub mod create;
pub mod run;
pub mod test_all;
pub mod validate;
