//! Core domain types: text normalization and the letter multiset

mod letters;
mod normalize;

pub use letters::{ALPHABET_LEN, LetterPool};
pub use normalize::{canonical_key, normalize};
