//! One-shot search command
//!
//! Runs the symmetric-tolerance search for a phrase and prepares the
//! records for presentation: diffed against the original letters and sorted
//! by total difference, then solution text.

use crate::core::{LetterPool, normalize};
use crate::dictionary::Trie;
use crate::search::{ResultRecord, SymmetricSearch, diff, task_count};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for one search
pub struct FindConfig {
    pub phrase: String,
    pub tolerance: u32,
    /// Optional cap on solutions collected per engine invocation
    pub max_solutions: Option<usize>,
    /// Show a progress bar over the insertion-combo tasks
    pub progress: bool,
}

impl FindConfig {
    #[must_use]
    pub const fn new(phrase: String, tolerance: u32) -> Self {
        Self {
            phrase,
            tolerance,
            max_solutions: None,
            progress: false,
        }
    }
}

/// Result of one search, ready for display
pub struct FindResult {
    pub phrase: String,
    /// The phrase's normalized letters, sorted
    pub letters: String,
    pub tolerance: u32,
    pub records: Vec<ResultRecord>,
    pub tasks: u64,
    pub duration: Duration,
}

/// Run a search against the index
#[must_use]
pub fn run_find(config: &FindConfig, trie: &Trie) -> FindResult {
    let original = LetterPool::from_phrase(&config.phrase);
    let tasks = task_count(config.tolerance);

    let driver = SymmetricSearch::new(trie).with_max_solutions(config.max_solutions);

    let start = Instant::now();
    let solutions = if config.progress && tasks > 1 {
        let bar = ProgressBar::new(tasks);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        let found =
            driver.find_with_progress(&config.phrase, config.tolerance, || bar.inc(1));
        bar.finish_and_clear();
        found
    } else {
        driver.find(&config.phrase, config.tolerance)
    };
    let duration = start.elapsed();

    let mut records: Vec<ResultRecord> = solutions
        .into_iter()
        .map(|solution| diff(solution, &original))
        .collect();
    records.sort_by(|a, b| {
        a.difference()
            .cmp(&b.difference())
            .then_with(|| a.solution.cmp(&b.solution))
    });

    let mut letters = normalize(&config.phrase).into_bytes();
    letters.sort_unstable();

    FindResult {
        phrase: config.phrase.clone(),
        letters: String::from_utf8(letters).unwrap_or_default(),
        tolerance: config.tolerance,
        records,
        tasks,
        duration,
    }
}
