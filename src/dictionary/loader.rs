//! Word list loading
//!
//! Reads a dictionary file, one word per line (UTF-8). Duplicates are kept;
//! the index decides what to do with them.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and empty lines skipped. Duplicate words are preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. A missing dictionary at
/// first build is the one fatal condition in the system; the caller attaches
/// context and aborts.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}
