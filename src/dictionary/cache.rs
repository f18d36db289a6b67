//! On-disk index cache
//!
//! A versioned binary snapshot of the built trie for fast startup: 8 magic
//! bytes, then a bincode-encoded envelope carrying an explicit schema
//! version. Any load failure (missing file, truncated data, wrong magic,
//! version mismatch, decode error) falls back to a rebuild from the word
//! list; the cache is never allowed to make the program fail.

use crate::dictionary::loader::load_words;
use crate::dictionary::trie::Trie;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const CACHE_MAGIC: &[u8; 8] = b"ANAGIDX\0";
const CACHE_VERSION: u16 = 1;

/// Version-tagged snapshot body
///
/// Borrowed on save, owned on load; bincode encodes both identically.
#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u16,
    trie: &'a Trie,
}

#[derive(Deserialize)]
struct Envelope {
    version: u16,
    trie: Trie,
}

/// Persist the index snapshot
///
/// # Errors
///
/// Returns an I/O error if the snapshot cannot be written. Callers treat a
/// failed save as a warning, not a failure.
pub fn save<P: AsRef<Path>>(trie: &Trie, path: P) -> io::Result<()> {
    let envelope = EnvelopeRef {
        version: CACHE_VERSION,
        trie,
    };
    let body = bincode::serialize(&envelope)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut bytes = Vec::with_capacity(CACHE_MAGIC.len() + body.len());
    bytes.extend_from_slice(CACHE_MAGIC);
    bytes.extend_from_slice(&body);
    fs::write(path, bytes)
}

/// Load the index snapshot, if it is structurally valid
///
/// Returns `None` on any defect: missing file, wrong magic, schema version
/// mismatch, decode failure, or an empty index.
#[must_use]
pub fn load<P: AsRef<Path>>(path: P) -> Option<Trie> {
    let bytes = fs::read(path).ok()?;
    let body = bytes.strip_prefix(CACHE_MAGIC.as_slice())?;

    let envelope: Envelope = bincode::deserialize(body).ok()?;
    if envelope.version != CACHE_VERSION || envelope.trie.is_empty() {
        return None;
    }
    Some(envelope.trie)
}

/// Load the index from cache, or rebuild it from the dictionary file
///
/// A valid cache wins unless `force_rebuild` is set. A rebuild re-persists
/// the snapshot on a best-effort basis.
///
/// # Errors
///
/// Returns an error only when the dictionary file itself cannot be read
/// while a rebuild is required — the one unrecoverable condition.
pub fn load_or_build<P, Q>(dictionary: P, cache: Q, force_rebuild: bool) -> Result<Trie>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if !force_rebuild {
        if let Some(trie) = load(&cache) {
            return Ok(trie);
        }
    }

    let words = load_words(&dictionary).with_context(|| {
        format!(
            "cannot read dictionary file '{}'",
            dictionary.as_ref().display()
        )
    })?;
    let trie = Trie::build(&words);

    if let Err(e) = save(&trie, &cache) {
        eprintln!(
            "{}",
            format!(
                "warning: could not write index cache '{}': {e}",
                cache.as_ref().display()
            )
            .yellow()
        );
    }

    Ok(trie)
}
