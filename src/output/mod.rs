//! Terminal output formatting

mod display;

pub use display::{print_check_result, print_find_result};
