//! Tolerant search engine
//!
//! Recursively composes feasible words into multi-word solutions whose
//! leftover letters stay within a removal budget. Two rules keep the search
//! from blowing up on duplicates: each appended word must compare
//! lexicographically ≥ the word before it (so a word multiset is only ever
//! built in one order), and recursion stops once the pool is spent (no word
//! can consume zero letters, since sub-2-letter words are never indexed).

use crate::core::LetterPool;
use crate::dictionary::Trie;
use crate::search::feasible::feasible_words;
use crate::search::solution::Solution;
use rustc_hash::FxHashSet;

/// Multi-word search over a fixed canonical index
pub struct TolerantSearch<'a> {
    trie: &'a Trie,
    max_solutions: Option<usize>,
}

impl<'a> TolerantSearch<'a> {
    /// Create a search over the given index, with no solution cap
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            max_solutions: None,
        }
    }

    /// Cap the number of solutions one invocation may collect
    ///
    /// The cap bounds work on pathological inputs; the default is uncapped.
    #[must_use]
    pub const fn with_max_solutions(mut self, max: Option<usize>) -> Self {
        self.max_solutions = max;
        self
    }

    /// Find every word combination covering the pool within the budget
    ///
    /// A combination is a solution when the letters it leaves unused number
    /// at most `removal_budget`. A budget of 0 demands exact coverage. An
    /// empty pool yields the empty set.
    #[must_use]
    pub fn search(&self, pool: &LetterPool, removal_budget: u32) -> FxHashSet<Solution> {
        let mut solutions = FxHashSet::default();
        let mut path: Vec<String> = Vec::new();
        self.extend(pool, &mut path, removal_budget, &mut solutions);
        solutions
    }

    fn extend(
        &self,
        pool: &LetterPool,
        path: &mut Vec<String>,
        budget: u32,
        out: &mut FxHashSet<Solution>,
    ) {
        for (word, remainder) in feasible_words(self.trie, pool) {
            if self.at_capacity(out) {
                return;
            }

            // Ordering constraint: only build each word multiset once
            if path.last().is_some_and(|last| word < last.as_str()) {
                continue;
            }

            let leftover = remainder.total();
            if leftover <= budget {
                let mut words = path.clone();
                words.push(word.to_string());
                out.insert(Solution::new(words));
            }

            // A spent pool cannot feed another word
            if leftover > 0 {
                path.push(word.to_string());
                self.extend(&remainder, path, budget, out);
                path.pop();
            }
        }
    }

    fn at_capacity(&self, out: &FxHashSet<Solution>) -> bool {
        self.max_solutions.is_some_and(|max| out.len() >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(solutions: &FxHashSet<Solution>) -> Vec<String> {
        let mut texts: Vec<String> = solutions.iter().map(Solution::text).collect();
        texts.sort();
        texts
    }

    #[test]
    fn exact_single_word_anagrams() {
        let trie = Trie::build(["chien", "niche", "chie", "le", "en"]);
        let search = TolerantSearch::new(&trie);

        let solutions = search.search(&LetterPool::from_phrase("chien"), 0);
        assert_eq!(texts(&solutions), ["chien", "niche"]);
    }

    #[test]
    fn exact_two_word_split() {
        let trie = Trie::build(["chien", "le"]);
        let search = TolerantSearch::new(&trie);

        let solutions = search.search(&LetterPool::from_phrase("lechien"), 0);
        assert_eq!(texts(&solutions), ["chien le"]);
    }

    #[test]
    fn budget_allows_leftover_letters() {
        let trie = Trie::build(["chien"]);
        let search = TolerantSearch::new(&trie);

        // "chien a" leaves one unused letter
        let pool = LetterPool::from_phrase("chien a");
        assert!(search.search(&pool, 0).is_empty());

        let solutions = search.search(&pool, 1);
        assert_eq!(texts(&solutions), ["chien"]);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let trie = Trie::build(["chat"]);
        let search = TolerantSearch::new(&trie);

        let solutions = search.search(&LetterPool::from_phrase("chien"), 0);
        assert!(solutions.is_empty());
    }

    #[test]
    fn empty_pool_yields_empty_set() {
        let trie = Trie::build(["chien"]);
        let search = TolerantSearch::new(&trie);
        assert!(search.search(&LetterPool::new(), 0).is_empty());
        assert!(search.search(&LetterPool::new(), 3).is_empty());
    }

    #[test]
    fn no_permutation_duplicates() {
        let trie = Trie::build(["le", "en"]);
        let search = TolerantSearch::new(&trie);

        // "leen" decomposes as en+le in exactly one solution
        let solutions = search.search(&LetterPool::from_phrase("leen"), 0);
        assert_eq!(texts(&solutions), ["en le"]);
    }

    #[test]
    fn same_word_may_repeat() {
        let trie = Trie::build(["le"]);
        let search = TolerantSearch::new(&trie);

        let solutions = search.search(&LetterPool::from_phrase("lele"), 0);
        assert_eq!(texts(&solutions), ["le le"]);
    }

    #[test]
    fn budget_is_shared_across_depths() {
        let trie = Trie::build(["chien", "le"]);
        let search = TolerantSearch::new(&trie);

        // With one spare letter both the partial and the full split qualify
        let solutions = search.search(&LetterPool::from_phrase("lechiena"), 1);
        assert_eq!(texts(&solutions), ["chien le"]);

        let solutions = search.search(&LetterPool::from_phrase("lechien"), 2);
        assert_eq!(texts(&solutions), ["chien", "chien le"]);
    }

    #[test]
    fn solution_cap_limits_results() {
        let trie = Trie::build(["le", "en", "ne", "el"]);
        let search = TolerantSearch::new(&trie).with_max_solutions(Some(1));

        let solutions = search.search(&LetterPool::from_phrase("lene"), 2);
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn monotone_in_budget() {
        let trie = Trie::build(["chien", "niche", "chie", "le", "en", "ne"]);
        let search = TolerantSearch::new(&trie);
        let pool = LetterPool::from_phrase("le chien");

        for budget in 1..=4 {
            let smaller = search.search(&pool, budget - 1);
            let larger = search.search(&pool, budget);
            assert!(
                smaller.is_subset(&larger),
                "budget {budget} lost solutions found at {}",
                budget - 1
            );
        }
    }
}
