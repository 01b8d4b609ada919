//! Dictionary lookup module
//!
//! Loads and queries the known-word set backing the dictionary penalty.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static KNOWN_WORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/dictionary.txt`
pub fn get_dictionary_path() -> PathBuf {
    std::env::var("PWD_DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/dictionary.txt"))
}

/// Initializes the known-word set from an external file.
///
/// Set `PWD_DICTIONARY_PATH` to point at a custom word list, one word
/// per line. Without it, the default `./assets/dictionary.txt` is used.
/// Initialization is idempotent.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
///
/// A failed initialization leaves the set empty; callers should then
/// construct their field without a dictionary predicate so the penalty
/// path stays disabled.
pub fn init_dictionary() -> Result<usize, DictionaryError> {
    let path = get_dictionary_path();
    init_dictionary_from_path(&path)
}

/// Initializes the known-word set from a specific file path.
///
/// Use this when the caller resolves the word-list location itself
/// (e.g., from an application asset bundle) instead of relying on
/// environment variables.
///
/// # Errors
///
/// Same conditions as [`init_dictionary`].
pub fn init_dictionary_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, DictionaryError> {
    // Idempotente: se gia inizializzata, ritorna subito
    {
        let guard = KNOWN_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: FileNotFound {}", path.display());
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: Empty file {}", path.display());
        return Err(DictionaryError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = KNOWN_WORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the loaded word set.
///
/// Returns `None` if `init_dictionary()` has not been called.
pub fn get_dictionary() -> Option<HashSet<String>> {
    let guard = KNOWN_WORDS.read().unwrap();
    guard.clone()
}

/// Checks whether the text is a known dictionary word.
///
/// Matching is exact apart from case. Returns `false` when the set was
/// never initialized, which keeps the penalty inert.
pub fn is_dictionary_word(word: &str) -> bool {
    let guard = KNOWN_WORDS.read().unwrap();
    guard
        .as_ref()
        .map(|words| words.contains(&word.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the word set for testing purposes.
#[cfg(test)]
pub fn reset_dictionary_for_testing() {
    let mut guard = KNOWN_WORDS.write().unwrap();
    *guard = None;
}
