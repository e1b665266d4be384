//! Tokenization front-end for raw documents.
//!
//! The corpus accumulator consumes ordered term sequences; this module
//! supplies the minimal producer side. All tokenizers implement the
//! `Tokenizer` trait and follow zero-unwrap safety.

use crate::error::Result;

/// Turns a raw document into an ordered sequence of tokens.
pub trait Tokenizer {
    /// Tokenize `text` into an ordered token sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation stays attached to words; empty fragments are dropped.
///
/// # Examples
///
/// ```
/// use picar::tokenize::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("hola,  mundo!\n").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["hola,", "mundo!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}
