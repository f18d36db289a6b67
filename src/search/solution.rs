//! Solution type
//!
//! A solution is an order-independent multiset of dictionary words. The
//! search path that produced it was ordered; the solution stores the words
//! sorted so that the same combination found through different insertion
//! combos hashes identically and collapses in the result set.

use crate::core::LetterPool;
use std::fmt;

/// A deduplicated, order-independent set of dictionary words
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution(Vec<String>);

impl Solution {
    /// Create a solution from the words of a search path
    ///
    /// The words are sorted; the original path order is not meaningful.
    #[must_use]
    pub fn new(mut words: Vec<String>) -> Self {
        words.sort();
        Self(words)
    }

    /// The words of the solution, in sorted order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Combined letter pool of every word in the solution
    #[must_use]
    pub fn letter_pool(&self) -> LetterPool {
        let mut pool = LetterPool::new();
        for word in &self.0 {
            pool.absorb(&LetterPool::from_phrase(word));
        }
        pool
    }

    /// The solution as display text, words joined by spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_sorts_words() {
        let solution = Solution::new(vec!["le".to_string(), "chien".to_string()]);
        assert_eq!(solution.words(), ["chien", "le"]);
        assert_eq!(solution.text(), "chien le");
    }

    #[test]
    fn solution_order_independent_equality() {
        let a = Solution::new(vec!["le".to_string(), "chien".to_string()]);
        let b = Solution::new(vec!["chien".to_string(), "le".to_string()]);
        assert_eq!(a, b);
    }

    #[test]
    fn solution_letter_pool_accumulates() {
        let solution = Solution::new(vec!["le".to_string(), "chien".to_string()]);
        assert_eq!(solution.letter_pool(), LetterPool::from_letters("lechien"));
    }

    #[test]
    fn solution_pool_normalizes_spellings() {
        let solution = Solution::new(vec!["été".to_string()]);
        assert_eq!(solution.letter_pool(), LetterPool::from_letters("ete"));
    }
}
