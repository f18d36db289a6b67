//! Canonical-form index
//!
//! A trie keyed by sorted letters. Every word is inserted under its
//! canonical key (sorted normalized letters), so all mutual anagrams share
//! one terminal node. The trie is built once per dictionary and is read-only
//! afterwards; searches only ever borrow it.

use crate::core::canonical_key;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Minimum normalized length for a word to be indexed
///
/// Single letters match almost any pool and drown the results in noise.
const MIN_WORD_LETTERS: usize = 2;

/// One node of the canonical index
///
/// The letters on the path from the root to a node, read as a multiset,
/// equal the canonical key of every word stored at that node.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    words: Vec<String>,
}

impl TrieNode {
    /// Child node for a letter, if present
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Original dictionary words terminating exactly at this node
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Canonical-form index over a dictionary
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a word list
    ///
    /// Words whose normalized form has fewer than 2 letters are skipped.
    /// Duplicate spellings and duplicate canonical forms are all kept; the
    /// original (unnormalized) spelling is what gets stored.
    #[must_use]
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert one word under its canonical key
    pub fn insert(&mut self, word: &str) {
        let key = canonical_key(word);
        if key.len() < MIN_WORD_LETTERS {
            return;
        }

        let mut node = &mut self.root;
        for letter in key.bytes() {
            node = node.children.entry(letter).or_default();
        }
        node.words.push(word.to_string());
        self.word_count += 1;
    }

    /// Root node of the index (empty key)
    #[inline]
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of indexed words (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether the index holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Check whether this exact spelling exists in the dictionary
    ///
    /// Walks the word's canonical key and then requires the original string
    /// itself at the terminal node. An anagram of a dictionary word is not
    /// enough.
    #[must_use]
    pub fn contains_exact(&self, word: &str) -> bool {
        self.terminal_node(word)
            .is_some_and(|node| node.words.iter().any(|w| w == word))
    }

    /// All dictionary spellings sharing the word's canonical form
    ///
    /// Includes the word itself when it is in the dictionary.
    #[must_use]
    pub fn anagrams_of(&self, word: &str) -> &[String] {
        self.terminal_node(word)
            .map_or(&[], |node| node.words.as_slice())
    }

    fn terminal_node(&self, word: &str) -> Option<&TrieNode> {
        let key = canonical_key(word);
        if key.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for letter in key.bytes() {
            node = node.child(letter)?;
        }
        Some(node)
    }
}
