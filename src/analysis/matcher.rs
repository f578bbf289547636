//! Fuzzy dictionary matching against common/forbidden words.

use super::distance::{DEFAULT_COST_CAP, damerau_levenshtein};

/// Checks whether the password vaguely contains any of the given words.
///
/// The password is lower-cased once, each word is lower-cased as it is
/// scanned, and matching is as follows:
///
/// - password no longer than the word: a single edit-distance comparison
///   against `max_distance`;
/// - password longer than the word: a window of the word's char length
///   slides across the password, and any window within `max_distance`
///   counts as a match.
///
/// Returns `true` as soon as any word matches, `false` only after scanning
/// the whole dictionary. A `max_distance` of 0 accepts exact (windowed)
/// occurrences only. Worst case is
/// O(dictionary size × password length × word length²), which is fine for
/// the short dictionaries and passwords this crate is built for.
pub fn is_forbidden<S: AsRef<str>>(password: &str, words: &[S], max_distance: usize) -> bool {
    let password = password.to_lowercase();
    words
        .iter()
        .any(|word| vague_match(&password, &word.as_ref().to_lowercase(), max_distance))
}

/// Window-by-window comparison of one (already lower-cased) word.
fn vague_match(password: &str, word: &str, max_distance: usize) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let word_len = word.chars().count();

    if chars.len() <= word_len {
        return damerau_levenshtein(password, word, Some(DEFAULT_COST_CAP)) <= max_distance;
    }

    for start in 0..=(chars.len() - word_len) {
        let window: String = chars[start..start + word_len].iter().collect();
        if damerau_levenshtein(&window, word, Some(DEFAULT_COST_CAP)) <= max_distance {
            return true;
        }
    }
    false
}
