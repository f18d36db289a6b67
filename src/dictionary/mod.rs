//! Dictionary handling: the canonical-form index, word list loading, and
//! the on-disk index cache

pub mod cache;
pub mod loader;
mod trie;

pub use trie::{Trie, TrieNode};
