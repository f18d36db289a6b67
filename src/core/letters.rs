//! Letter multiset
//!
//! A `LetterPool` counts how many of each letter `a..=z` remain available.
//! It is the mutable state threaded through the search: the trie walk takes
//! a letter before descending into a child and puts it back on return, so
//! sibling branches always see the correct counts.

use crate::core::normalize;

/// Number of letters in the alphabet the solver operates over
pub const ALPHABET_LEN: usize = 26;

/// A multiset of letters `a..=z`
///
/// Counts are non-negative by construction; an absent letter has count 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: [u32; ALPHABET_LEN],
}

#[inline]
fn slot(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

impl LetterPool {
    /// Create an empty pool
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
        }
    }

    /// Build a pool from already-normalized letters
    ///
    /// Characters outside `a..=z` are ignored.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut pool = Self::new();
        for b in letters.bytes().filter(u8::is_ascii_lowercase) {
            pool.put(b);
        }
        pool
    }

    /// Build a pool from free text, normalizing it first
    #[must_use]
    pub fn from_phrase(text: &str) -> Self {
        Self::from_letters(&normalize(text))
    }

    /// Count of a single letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts[slot(letter)]
    }

    /// Add one occurrence of a letter
    #[inline]
    pub fn put(&mut self, letter: u8) {
        self.counts[slot(letter)] += 1;
    }

    /// Remove one occurrence of a letter
    ///
    /// Callers must only take letters they have observed via [`Self::count`];
    /// the take/put bracket is what keeps backtracking sound.
    #[inline]
    pub fn take(&mut self, letter: u8) {
        debug_assert!(self.counts[slot(letter)] > 0, "take on empty slot");
        self.counts[slot(letter)] -= 1;
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Whether the pool holds no letters at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Add every letter of another pool into this one
    pub fn absorb(&mut self, other: &Self) {
        for i in 0..ALPHABET_LEN {
            self.counts[i] += other.counts[i];
        }
    }

    /// Per-letter subtraction, clamped at zero (never negative)
    #[must_use]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for i in 0..ALPHABET_LEN {
            result.counts[i] = self.counts[i].saturating_sub(other.counts[i]);
        }
        result
    }

    /// Iterate over `(letter, count)` pairs with a non-zero count
    pub fn letters(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (b'a' + i as u8, c))
    }

    /// Render the pool as a sorted letter string, e.g. `{a:1, c:2}` → `"acc"`
    #[must_use]
    pub fn to_sorted_string(&self) -> String {
        let mut out = String::with_capacity(self.total() as usize);
        for (letter, count) in self.letters() {
            for _ in 0..count {
                out.push(letter as char);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_from_letters_counts() {
        let pool = LetterPool::from_letters("chienne");
        assert_eq!(pool.count(b'n'), 2);
        assert_eq!(pool.count(b'e'), 2);
        assert_eq!(pool.count(b'c'), 1);
        assert_eq!(pool.count(b'z'), 0);
        assert_eq!(pool.total(), 7);
    }

    #[test]
    fn pool_from_phrase_normalizes() {
        let pool = LetterPool::from_phrase("Éléphant rosé!");
        assert_eq!(pool, LetterPool::from_letters("elephantrose"));
    }

    #[test]
    fn pool_empty() {
        let pool = LetterPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.total(), 0);
        assert_eq!(pool.to_sorted_string(), "");
    }

    #[test]
    fn take_put_round_trip() {
        let mut pool = LetterPool::from_letters("abc");
        pool.take(b'b');
        assert_eq!(pool.count(b'b'), 0);
        assert_eq!(pool.total(), 2);

        pool.put(b'b');
        assert_eq!(pool, LetterPool::from_letters("abc"));
    }

    #[test]
    fn absorb_adds_counts() {
        let mut pool = LetterPool::from_letters("ab");
        pool.absorb(&LetterPool::from_letters("bc"));
        assert_eq!(pool, LetterPool::from_letters("abbc"));
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        let a = LetterPool::from_letters("aabc");
        let b = LetterPool::from_letters("abzz");

        let diff = a.saturating_sub(&b);
        assert_eq!(diff, LetterPool::from_letters("ac"));

        // Other direction: the missing letters, never negative counts
        let rev = b.saturating_sub(&a);
        assert_eq!(rev, LetterPool::from_letters("zz"));
    }

    #[test]
    fn sorted_string_is_sorted() {
        let pool = LetterPool::from_letters("cabbage");
        assert_eq!(pool.to_sorted_string(), "aabbceg");
    }

    #[test]
    fn letters_skips_zero_counts() {
        let pool = LetterPool::from_letters("zza");
        let pairs: Vec<_> = pool.letters().collect();
        assert_eq!(pairs, vec![(b'a', 1), (b'z', 2)]);
    }
}
