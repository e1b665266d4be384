//! N-gram generation over filtered token sequences.
//!
//! Terms fed to the hashing corpus may be single tokens or joined
//! n-grams. Stop words are dropped first, then windows of the filtered
//! sequence are joined with a delimiter, so an n-gram never spans a
//! removed stop word.

use std::collections::HashSet;

use crate::error::{PicarError, Result};

/// Delimiter used to join the tokens of an n-gram.
pub const NGRAM_DELIM: &str = "_";

/// Generate n-grams of every order in `[ngram_min, ngram_max]` from a
/// token sequence.
///
/// Tokens present in `stop_words` are removed before n-gram formation.
/// Orders are emitted in ascending order, each order in document order,
/// matching how a per-order scan of the filtered sequence reads.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` if `ngram_min` is zero or the range
/// is inverted.
///
/// # Examples
///
/// ```
/// use picar::ngram::generate_ngrams;
///
/// let tokens = vec!["the".to_string(), "cat".to_string(), "sat".to_string()];
/// let grams = generate_ngrams(&tokens, 1, 2, None).expect("valid range");
/// assert_eq!(grams, vec!["the", "cat", "sat", "the_cat", "cat_sat"]);
/// ```
pub fn generate_ngrams(
    tokens: &[String],
    ngram_min: usize,
    ngram_max: usize,
    stop_words: Option<&HashSet<String>>,
) -> Result<Vec<String>> {
    if ngram_min == 0 {
        return Err(PicarError::invalid_hyperparameter(
            "ngram_min",
            ngram_min,
            ">=1",
        ));
    }
    if ngram_max < ngram_min {
        return Err(PicarError::invalid_hyperparameter(
            "ngram_max",
            ngram_max,
            ">=ngram_min",
        ));
    }

    let filtered: Vec<&str> = tokens
        .iter()
        .filter(|t| stop_words.map_or(true, |set| !set.contains(*t)))
        .map(String::as_str)
        .collect();

    let mut grams = Vec::new();
    for n in ngram_min..=ngram_max {
        for window in filtered.windows(n) {
            grams.push(window.join(NGRAM_DELIM));
        }
    }
    Ok(grams)
}
