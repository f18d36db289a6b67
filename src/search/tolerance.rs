//! Symmetric tolerance driver
//!
//! A total tolerance T may be spent on letters dropped from the phrase, on
//! letters borrowed from outside it, or on any split between the two. For
//! each insertion count k in 0..=T the driver enumerates every multiset of k
//! letters over the alphabet, augments the phrase pool with it, and runs the
//! tolerant engine with the remaining budget T−k. The combo count for one k
//! is the multiset coefficient C(25+k, k), so work grows combinatorially
//! with T; tolerances beyond 2–3 are expected to be slow.
//!
//! The combo invocations are independent, so they run on the rayon pool and
//! their local result sets are unioned at the end.

use crate::core::{ALPHABET_LEN, LetterPool};
use crate::dictionary::Trie;
use crate::search::engine::TolerantSearch;
use crate::search::solution::Solution;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Symmetric-tolerance search over a fixed canonical index
pub struct SymmetricSearch<'a> {
    trie: &'a Trie,
    max_solutions: Option<usize>,
}

impl<'a> SymmetricSearch<'a> {
    /// Create a driver over the given index
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            max_solutions: None,
        }
    }

    /// Cap the solutions collected per insertion combo (default uncapped)
    #[must_use]
    pub const fn with_max_solutions(mut self, max: Option<usize>) -> Self {
        self.max_solutions = max;
        self
    }

    /// Find all solutions for a phrase within a total tolerance
    #[must_use]
    pub fn find(&self, phrase: &str, tolerance: u32) -> FxHashSet<Solution> {
        self.find_with_progress(phrase, tolerance, || {})
    }

    /// As [`Self::find`], invoking `tick` once per completed insertion combo
    ///
    /// `task_count(tolerance)` ticks happen in total, from worker threads.
    pub fn find_with_progress<F>(
        &self,
        phrase: &str,
        tolerance: u32,
        tick: F,
    ) -> FxHashSet<Solution>
    where
        F: Fn() + Sync,
    {
        let base = LetterPool::from_phrase(phrase);

        let mut tasks: Vec<(LetterPool, u32)> = Vec::new();
        for k in 0..=tolerance {
            let budget = tolerance - k;
            for insertion in insertion_combos(k) {
                let mut pool = base.clone();
                pool.absorb(&insertion);
                tasks.push((pool, budget));
            }
        }

        tasks
            .par_iter()
            .map(|(pool, budget)| {
                let found = TolerantSearch::new(self.trie)
                    .with_max_solutions(self.max_solutions)
                    .search(pool, *budget);
                tick();
                found
            })
            .reduce(FxHashSet::default, |mut merged, local| {
                merged.extend(local);
                merged
            })
    }
}

/// Number of engine invocations a search with this tolerance performs
///
/// Sum over k of the k-multiset coefficient C(25+k, k); this is the task
/// total that progress reporting is driven by.
#[must_use]
pub fn task_count(tolerance: u32) -> u64 {
    (0..=u64::from(tolerance))
        .map(|k| {
            // C(25+k, k) computed incrementally to stay exact in u64
            let mut combos = 1u64;
            for i in 1..=k {
                combos = combos * (ALPHABET_LEN as u64 - 1 + i) / i;
            }
            combos
        })
        .sum()
}

/// Every multiset of exactly `k` letters over the alphabet
///
/// Generated as non-decreasing letter sequences, so each multiset appears
/// once.
fn insertion_combos(k: u32) -> Vec<LetterPool> {
    let mut combos = Vec::new();
    let mut current = LetterPool::new();
    fill(b'a', k, &mut current, &mut combos);
    combos
}

fn fill(start: u8, remaining: u32, current: &mut LetterPool, out: &mut Vec<LetterPool>) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for letter in start..=b'z' {
        current.put(letter);
        fill(letter, remaining - 1, current, out);
        current.take(letter);
    }
}
