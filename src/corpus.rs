//! Streaming corpus accumulation over hashed buckets.
//!
//! `HashingCorpus` ingests pre-tokenized documents one at a time and
//! maintains two sparse outputs:
//!
//! - the document-term matrix (DTM): one row per document, one column
//!   per hash bucket, signed-integer term counts;
//! - the term-co-occurrence matrix (TCM): `bucket_count × bucket_count`
//!   floating-point weights from a sliding context window.
//!
//! Ingestion is single-writer, streaming, append-only: matrices only
//! grow, and each document is processed to completion before the next
//! begins. Batch insertion can be interrupted between documents, never
//! mid-document.
//!
//! # Quick Start
//!
//! ```
//! use picar::corpus::HashingCorpus;
//! use picar::window::ContextMode;
//!
//! let mut corpus = HashingCorpus::new(100)
//!     .expect("bucket_count > 0")
//!     .with_window_size(2);
//!
//! let doc = ["the", "cat", "sat"];
//! corpus.insert_document(&doc, true, ContextMode::Forward);
//!
//! assert_eq!(corpus.doc_count(), 1);
//! assert_eq!(corpus.token_count(), 3);
//! ```

use crate::error::{PicarError, Result};
use crate::hash::FeatureHasher;
use crate::sparse::SparseTripletMatrix;
use crate::window::{accumulate_window, harmonic_decay, ContextMode};

/// Streaming accumulator for hashed document-term and term-co-occurrence
/// matrices.
///
/// Hyperparameters (`bucket_count`, n-gram range, window size, signed
/// hashing, weighting function) are fixed at construction; the context
/// mode is chosen per insertion call.
pub struct HashingCorpus {
    hasher: FeatureHasher,
    dtm: SparseTripletMatrix<i32>,
    tcm: SparseTripletMatrix<f32>,
    doc_count: usize,
    token_count: usize,
    window_size: usize,
    ngram_min: usize,
    ngram_max: usize,
    signed_hash: bool,
    weighting: Box<dyn Fn(usize) -> f32>,
}

impl core::fmt::Debug for HashingCorpus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashingCorpus")
            .field("hasher", &self.hasher)
            .field("dtm", &self.dtm)
            .field("tcm", &self.tcm)
            .field("doc_count", &self.doc_count)
            .field("token_count", &self.token_count)
            .field("window_size", &self.window_size)
            .field("ngram_min", &self.ngram_min)
            .field("ngram_max", &self.ngram_max)
            .field("signed_hash", &self.signed_hash)
            .finish_non_exhaustive()
    }
}

impl HashingCorpus {
    /// Create a corpus accumulator over `bucket_count` hash buckets.
    ///
    /// Defaults: unigrams only, window size 0 (no co-occurrence
    /// counting), unsigned hashing, harmonic distance decay.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `bucket_count` is zero.
    pub fn new(bucket_count: u32) -> Result<Self> {
        let hasher = FeatureHasher::new(bucket_count)?;
        let buckets = bucket_count as usize;
        Ok(Self {
            hasher,
            dtm: SparseTripletMatrix::new(0, buckets),
            tcm: SparseTripletMatrix::new(buckets, buckets),
            doc_count: 0,
            token_count: 0,
            window_size: 0,
            ngram_min: 1,
            ngram_max: 1,
            signed_hash: false,
            weighting: Box::new(harmonic_decay),
        })
    }

    /// Set the sliding-window size for co-occurrence counting.
    ///
    /// A window of 0 disables the TCM entirely.
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the n-gram range advertised to tokenization front-ends.
    ///
    /// The corpus itself consumes term sequences as given; the range is
    /// carried for pipelines that generate n-grams before insertion.
    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_min = min_n.max(1);
        self.ngram_max = max_n.max(self.ngram_min);
        self
    }

    /// Enable or disable signed hashing.
    ///
    /// When enabled, each DTM increment is `+1` or `-1` according to a
    /// second independent hash, so colliding terms partially cancel
    /// rather than purely accumulate.
    #[must_use]
    pub fn with_signed_hash(mut self, enable: bool) -> Self {
        self.signed_hash = enable;
        self
    }

    /// Replace the co-occurrence weighting function.
    ///
    /// Must be defined for all distances `>= 1` and should be
    /// non-negative and non-increasing in distance.
    #[must_use]
    pub fn with_weighting(mut self, weighting: impl Fn(usize) -> f32 + 'static) -> Self {
        self.weighting = Box::new(weighting);
        self
    }

    /// Insert one pre-tokenized document.
    ///
    /// Each term in order increments `token_count` and hashes to its
    /// bucket; with `grow_dtm` the signed or unit count lands at
    /// `(current_document_row, bucket)`. The sliding window then routes
    /// weighted co-occurrence increments into the TCM under `context`.
    /// Afterwards the DTM row dimension and `doc_count` both grow by
    /// one, whether or not any coordinates were written.
    ///
    /// `grow_dtm = false` supports TCM-only passes over a corpus whose
    /// documents are already counted.
    pub fn insert_document<S: AsRef<str>>(
        &mut self,
        terms: &[S],
        grow_dtm: bool,
        context: ContextMode,
    ) {
        let buckets: Vec<usize> = terms
            .iter()
            .map(|t| self.hasher.bucket(t.as_ref()) as usize)
            .collect();
        self.token_count += terms.len();

        if grow_dtm {
            let row = self.doc_count;
            for (term, &bucket) in terms.iter().zip(&buckets) {
                let increment = if self.signed_hash {
                    self.hasher.sign(term.as_ref())
                } else {
                    1
                };
                self.dtm.add(row, bucket, increment);
            }
        }

        accumulate_window(
            &buckets,
            self.window_size,
            context,
            self.weighting.as_ref(),
            &mut self.tcm,
        );

        self.dtm.increment_nrows();
        self.doc_count += 1;
    }

    /// Insert a batch of documents strictly in input order.
    ///
    /// Document `i` of the batch becomes DTM row
    /// `doc_count_before_batch + i`; there is no reordering and no
    /// parallelism.
    pub fn insert_document_batch<S, D>(
        &mut self,
        documents: &[D],
        grow_dtm: bool,
        context: ContextMode,
    ) where
        S: AsRef<str>,
        D: AsRef<[S]>,
    {
        for document in documents {
            self.insert_document(document.as_ref(), grow_dtm, context);
        }
    }

    /// Insert a batch, checking `should_stop` before each document.
    ///
    /// On interruption the batch aborts before starting the next
    /// document: state reflects only fully completed documents, and the
    /// error reports how many committed. Returns the number of inserted
    /// documents when the batch runs to completion.
    ///
    /// # Errors
    ///
    /// Returns `Interrupted` if `should_stop` signals between
    /// documents.
    pub fn insert_document_batch_until<S, D, F>(
        &mut self,
        documents: &[D],
        grow_dtm: bool,
        context: ContextMode,
        mut should_stop: F,
    ) -> Result<usize>
    where
        S: AsRef<str>,
        D: AsRef<[S]>,
        F: FnMut() -> bool,
    {
        let mut completed = 0;
        for document in documents {
            if should_stop() {
                return Err(PicarError::Interrupted { completed });
            }
            self.insert_document(document.as_ref(), grow_dtm, context);
            completed += 1;
        }
        Ok(completed)
    }

    /// Snapshot the DTM as sorted `(document, bucket, count)` triplets.
    ///
    /// Dimensions are `doc_count × bucket_count`; reading does not
    /// reset state.
    #[must_use]
    pub fn dtm_triplets(&self) -> Vec<(usize, usize, i32)> {
        self.dtm.triplets()
    }

    /// Snapshot the TCM as sorted `(bucket, bucket, weight)` triplets.
    ///
    /// Dimensions are `bucket_count × bucket_count`.
    #[must_use]
    pub fn tcm_triplets(&self) -> Vec<(usize, usize, f32)> {
        self.tcm.triplets()
    }

    /// The DTM accumulator.
    #[must_use]
    pub fn dtm(&self) -> &SparseTripletMatrix<i32> {
        &self.dtm
    }

    /// The TCM accumulator.
    #[must_use]
    pub fn tcm(&self) -> &SparseTripletMatrix<f32> {
        &self.tcm
    }

    /// Reset the TCM only, preserving the DTM and all counters.
    ///
    /// Supports iterative co-occurrence-only reprocessing without
    /// rebuilding the document-indexed DTM.
    pub fn clear_tcm(&mut self) {
        self.tcm.clear();
    }

    /// Number of distinct TCM coordinates stored.
    #[must_use]
    pub fn tcm_nnz(&self) -> usize {
        self.tcm.nnz()
    }

    /// Total number of terms seen across all inserted documents,
    /// including `grow_dtm = false` passes.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of fully completed documents.
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of hash buckets (the column dimension of the DTM).
    #[must_use]
    pub fn bucket_count(&self) -> u32 {
        self.hasher.bucket_count()
    }

    /// Sliding-window size.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// N-gram range `(min, max)` carried for tokenization front-ends.
    #[must_use]
    pub fn ngram_range(&self) -> (usize, usize) {
        (self.ngram_min, self.ngram_max)
    }

    /// Whether signed hashing is enabled.
    #[must_use]
    pub fn signed_hash(&self) -> bool {
        self.signed_hash
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
