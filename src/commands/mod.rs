//! Command implementations

pub mod check;
pub mod find;
pub mod interactive;

pub use check::{CheckResult, check_word};
pub use find::{FindConfig, FindResult, run_find};
pub use interactive::run_interactive;
