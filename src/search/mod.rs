//! Anagram search: feasible-word enumeration, the tolerant combinatorial
//! engine, the symmetric-tolerance driver, and result diffing

mod diff;
mod engine;
mod feasible;
mod solution;
mod tolerance;

pub use diff::{ResultRecord, diff};
pub use engine::TolerantSearch;
pub use feasible::feasible_words;
pub use solution::Solution;
pub use tolerance::{SymmetricSearch, task_count};
