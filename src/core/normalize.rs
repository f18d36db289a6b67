//! Text normalization
//!
//! Maps arbitrary text onto the 26-letter alphabet every other component is
//! defined over: accents are stripped via Unicode NFD decomposition, and
//! anything that does not lowercase to an ASCII letter is discarded.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text to a lowercase, accent-stripped, letters-only string
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`. Empty input yields
/// an empty string, never an error.
///
/// # Examples
/// ```
/// use anagram_solver::core::normalize;
///
/// assert_eq!(normalize("Éléphant rosé!"), "elephantrose");
/// assert_eq!(normalize("123"), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphabetic)
        .collect()
}

/// Compute a word's canonical key: its normalized letters, sorted ascending
///
/// Two words share a canonical key iff they are exact anagrams of each other.
///
/// # Examples
/// ```
/// use anagram_solver::core::canonical_key;
///
/// assert_eq!(canonical_key("chien"), canonical_key("niche"));
/// assert_eq!(canonical_key("Déçà"), "acde");
/// ```
#[must_use]
pub fn canonical_key(word: &str) -> String {
    let mut letters = normalize(word).into_bytes();
    letters.sort_unstable();
    // Safe: normalize only emits ASCII letters
    String::from_utf8(letters).unwrap_or_default()
}
