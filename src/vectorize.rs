//! Fit-free hashing vectorization of raw documents.
//!
//! `HashingVectorizer` wires the tokenization front-end to the corpus
//! accumulator: tokenize, lowercase, drop stop words, form n-grams,
//! hash into buckets. Unlike a vocabulary-based vectorizer there is
//! nothing to learn — feature identity comes from the hash, so
//! ingestion is streaming and can be resumed at any time.
//!
//! # Quick Start
//!
//! ```
//! use picar::vectorize::HashingVectorizer;
//! use picar::tokenize::WhitespaceTokenizer;
//!
//! let docs = vec!["the cat sat", "the dog sat"];
//!
//! let mut vectorizer = HashingVectorizer::new(256)
//!     .expect("bucket_count > 0")
//!     .with_tokenizer(Box::new(WhitespaceTokenizer::new()))
//!     .with_window_size(2);
//!
//! vectorizer.ingest(&docs).expect("ingest should succeed");
//! assert_eq!(vectorizer.doc_count(), 2);
//! ```

use std::collections::HashSet;

use crate::corpus::HashingCorpus;
use crate::error::{PicarError, Result};
use crate::ngram::generate_ngrams;
use crate::tokenize::Tokenizer;
use crate::window::ContextMode;

/// Streaming raw-text front-end over `HashingCorpus`.
#[allow(missing_debug_implementations)]
pub struct HashingVectorizer {
    corpus: HashingCorpus,
    tokenizer: Option<Box<dyn Tokenizer>>,
    lowercase: bool,
    stop_words: Option<HashSet<String>>,
    context: ContextMode,
}

impl HashingVectorizer {
    /// Create a vectorizer over `bucket_count` hash buckets.
    ///
    /// Defaults: lowercasing on, no stop words, unigrams, window size
    /// 0, symmetric context, unsigned hashing.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `bucket_count` is zero.
    pub fn new(bucket_count: u32) -> Result<Self> {
        Ok(Self {
            corpus: HashingCorpus::new(bucket_count)?,
            tokenizer: None,
            lowercase: true,
            stop_words: None,
            context: ContextMode::default(),
        })
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Set whether to convert tokens to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Use custom stop words, removed before n-gram formation.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(words.iter().map(|w| w.to_lowercase()).collect());
        self
    }

    /// Set the n-gram range for feature extraction.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.corpus = self.corpus.with_ngram_range(min_n, max_n);
        self
    }

    /// Set the sliding-window size for co-occurrence counting.
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.corpus = self.corpus.with_window_size(window_size);
        self
    }

    /// Enable or disable signed hashing.
    #[must_use]
    pub fn with_signed_hash(mut self, enable: bool) -> Self {
        self.corpus = self.corpus.with_signed_hash(enable);
        self
    }

    /// Set the context mode used for co-occurrence counting.
    #[must_use]
    pub fn with_context_mode(mut self, context: ContextMode) -> Self {
        self.context = context;
        self
    }

    /// Ingest a batch of raw documents, in order.
    ///
    /// May be called repeatedly; each call appends to the running
    /// corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if no tokenizer is set, if tokenization fails,
    /// or if the configured n-gram range is invalid.
    pub fn ingest<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let tokenizer = self.tokenizer.as_ref().ok_or_else(|| {
            PicarError::Other("Tokenizer not set. Use with_tokenizer()".to_string())
        })?;
        let (ngram_min, ngram_max) = self.corpus.ngram_range();

        for document in documents {
            let tokens = tokenizer.tokenize(document.as_ref())?;
            let tokens: Vec<String> = if self.lowercase {
                tokens.into_iter().map(|t| t.to_lowercase()).collect()
            } else {
                tokens
            };
            let terms =
                generate_ngrams(&tokens, ngram_min, ngram_max, self.stop_words.as_ref())?;
            self.corpus.insert_document(&terms, true, self.context);
        }
        Ok(())
    }

    /// Snapshot the DTM as sorted `(document, bucket, count)` triplets.
    #[must_use]
    pub fn dtm_triplets(&self) -> Vec<(usize, usize, i32)> {
        self.corpus.dtm_triplets()
    }

    /// Snapshot the TCM as sorted `(bucket, bucket, weight)` triplets.
    #[must_use]
    pub fn tcm_triplets(&self) -> Vec<(usize, usize, f32)> {
        self.corpus.tcm_triplets()
    }

    /// Number of ingested documents.
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.corpus.doc_count()
    }

    /// Total number of terms hashed across all ingested documents.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.corpus.token_count()
    }

    /// The underlying corpus accumulator.
    #[must_use]
    pub fn corpus(&self) -> &HashingCorpus {
        &self.corpus
    }
}
