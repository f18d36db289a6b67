//! Exact-existence check command
//!
//! Probes whether a spelling is in the dictionary, and reports the indexed
//! words sharing its canonical form. Used interactively and by external
//! harnesses to confirm an expected answer's words exist before asserting a
//! search finds them.

use crate::core::canonical_key;
use crate::dictionary::Trie;

/// Result of probing one word against the index
pub struct CheckResult {
    pub word: String,
    pub canonical: String,
    /// True only when this exact spelling is in the dictionary
    pub exists: bool,
    /// All indexed words with the same canonical form, the word included
    pub anagrams: Vec<String>,
}

/// Check a word against the index
#[must_use]
pub fn check_word(word: &str, trie: &Trie) -> CheckResult {
    CheckResult {
        word: word.to_string(),
        canonical: canonical_key(word),
        exists: trie.contains_exact(word),
        anagrams: trie.anagrams_of(word).to_vec(),
    }
}
