//! Wordlist file loading.
//!
//! Turns a newline-separated wordlist file into the ordered word sequence
//! a [`crate::PasswordConfigUpdate`] expects. A pure function rather than
//! a process-wide registry: every profile owns its own word list.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Loads a newline-separated wordlist from `path`.
///
/// Lines are trimmed and lower-cased; blank lines are skipped. Order is
/// preserved so curated lists keep their most-common-first arrangement.
///
/// # Errors
///
/// Returns an error if:
/// - the file does not exist
/// - the file cannot be read
/// - the file contains no words
///
/// # Example
///
/// ```rust,no_run
/// use pwd_profile::{Password, PasswordConfigUpdate, load_wordlist};
///
/// let words = load_wordlist("./assets/10k-most-common.txt")?;
/// let profile = Password::new(
///     "candidate",
///     Some(PasswordConfigUpdate {
///         common_words: Some(words),
///         ..Default::default()
///     }),
///     None,
/// );
/// # Ok::<(), pwd_profile::WordlistError>(())
/// ```
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist loading FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist loading FAILED: Empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    let words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist loaded: {} words from {:?}", words.len(), path);

    Ok(words)
}
