//! Feasible-word enumeration
//!
//! A depth-first walk over the canonical index, constrained by the letters
//! still available in the pool. Trie keys are sorted, so a word is reachable
//! iff every prefix of its key can be paid for; descending consumes a letter
//! (`take`) and returning restores it (`put`), which keeps sibling branches
//! correct without copying the pool at every node.

use crate::core::LetterPool;
use crate::dictionary::{Trie, TrieNode};

/// Every dictionary word formable from the pool, with the pool left over
/// after removing that word's letters
///
/// The remainder attached to each word is a copy of the walk's pool at the
/// word's node: the path from the root already accounts for the word's own
/// letters. Emits no duplicates beyond what the dictionary itself contains
/// and is stateless between calls.
#[must_use]
pub fn feasible_words<'t>(trie: &'t Trie, pool: &LetterPool) -> Vec<(&'t str, LetterPool)> {
    let mut found = Vec::new();
    let mut scratch = pool.clone();
    walk(trie.root(), &mut scratch, &mut found);
    found
}

fn walk<'t>(node: &'t TrieNode, pool: &mut LetterPool, found: &mut Vec<(&'t str, LetterPool)>) {
    for word in node.words() {
        found.push((word.as_str(), pool.clone()));
    }

    for letter in b'a'..=b'z' {
        if pool.count(letter) == 0 {
            continue;
        }
        if let Some(child) = node.child(letter) {
            pool.take(letter);
            walk(child, pool, found);
            pool.put(letter);
        }
    }
}
