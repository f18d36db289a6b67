//! Anagram Solver
//!
//! Finds, for an input phrase, all combinations of dictionary words whose
//! combined letters match the phrase's letters exactly or within a bounded
//! symmetric tolerance (letters dropped from the phrase and/or borrowed from
//! outside it).
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::dictionary::Trie;
//! use anagram_solver::search::SymmetricSearch;
//!
//! let trie = Trie::build(["chien", "niche", "le"]);
//! let driver = SymmetricSearch::new(&trie);
//!
//! let solutions = driver.find("le chien", 0);
//! assert!(solutions.iter().any(|s| s.text() == "chien le"));
//! ```

// Core domain types
pub mod core;

// Canonical index, word lists, index cache
pub mod dictionary;

// Tolerant combinatorial search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
