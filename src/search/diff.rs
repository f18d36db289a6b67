//! Result differ
//!
//! Recomputes, for a raw solution, which original letters went unused and
//! which letters were borrowed from outside the phrase. Both directions use
//! clamped multiset subtraction, so counts never go negative.

use crate::core::LetterPool;
use crate::search::solution::Solution;

/// A solution together with its letter diff against the original phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub solution: Solution,
    /// Original letters the solution left unused, as a sorted string
    pub letters_removed: String,
    /// Letters the solution used that the phrase did not have, sorted
    pub letters_added: String,
    pub removed_count: u32,
    pub added_count: u32,
    /// Total number of letters across the solution's words
    pub solution_letters: u32,
}

impl ResultRecord {
    /// Total letter discrepancy (removed + added)
    #[must_use]
    pub const fn difference(&self) -> u32 {
        self.removed_count + self.added_count
    }

    /// Whether the solution is a true anagram of the phrase
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.removed_count == 0 && self.added_count == 0
    }
}

/// Diff a solution against the phrase's original letter pool
#[must_use]
pub fn diff(solution: Solution, original: &LetterPool) -> ResultRecord {
    let used = solution.letter_pool();
    let removed = original.saturating_sub(&used);
    let added = used.saturating_sub(original);

    ResultRecord {
        letters_removed: removed.to_sorted_string(),
        letters_added: added.to_sorted_string(),
        removed_count: removed.total(),
        added_count: added.total(),
        solution_letters: used.total(),
        solution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(words: &[&str]) -> Solution {
        Solution::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn exact_anagram_has_empty_diff() {
        let record = diff(
            solution(&["chien", "le"]),
            &LetterPool::from_phrase("le chien"),
        );
        assert!(record.is_exact());
        assert_eq!(record.difference(), 0);
        assert_eq!(record.letters_removed, "");
        assert_eq!(record.letters_added, "");
        assert_eq!(record.solution_letters, 7);
    }

    #[test]
    fn unused_letters_are_removed() {
        let record = diff(solution(&["chien"]), &LetterPool::from_phrase("chien a"));
        assert_eq!(record.letters_removed, "a");
        assert_eq!(record.removed_count, 1);
        assert_eq!(record.added_count, 0);
        assert!(!record.is_exact());
    }

    #[test]
    fn borrowed_letters_are_added() {
        let record = diff(solution(&["chien"]), &LetterPool::from_phrase("chie"));
        assert_eq!(record.letters_added, "n");
        assert_eq!(record.added_count, 1);
        assert_eq!(record.removed_count, 0);
    }

    #[test]
    fn both_directions_at_once() {
        // Phrase has a spare x, solution borrows an n
        let record = diff(solution(&["chien"]), &LetterPool::from_phrase("chiex"));
        assert_eq!(record.letters_removed, "x");
        assert_eq!(record.letters_added, "n");
        assert_eq!(record.difference(), 2);
    }

    #[test]
    fn diff_strings_are_sorted() {
        let record = diff(solution(&["ba"]), &LetterPool::from_phrase("zyx ba"));
        assert_eq!(record.letters_removed, "xyz");
    }

    #[test]
    fn accented_solutions_diff_on_normalized_letters() {
        let record = diff(solution(&["été"]), &LetterPool::from_phrase("tee"));
        assert!(record.is_exact());
    }
}
