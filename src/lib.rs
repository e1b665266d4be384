//! Picar: streaming feature-hashing text vectorization in pure Rust.
//!
//! Picar turns tokenized documents into two sparse matrices via the
//! hashing trick: a document-term matrix (DTM) of signed term counts
//! and a term-co-occurrence matrix (TCM) of distance-weighted window
//! counts. There is no vocabulary to fit — feature identity comes from
//! a fixed-seed hash, so ingestion is streaming, single-pass, and
//! bounded in memory by the bucket count.
//!
//! # Quick Start
//!
//! ```
//! use picar::prelude::*;
//!
//! let mut corpus = HashingCorpus::new(1 << 16)
//!     .expect("bucket_count > 0")
//!     .with_window_size(5);
//!
//! corpus.insert_document(&["the", "cat", "sat"], true, ContextMode::Symmetric);
//! corpus.insert_document(&["the", "dog", "ran"], true, ContextMode::Symmetric);
//!
//! assert_eq!(corpus.doc_count(), 2);
//! assert_eq!(corpus.token_count(), 6);
//!
//! let dtm = corpus.dtm_triplets();   // (document, bucket, count)
//! let tcm = corpus.tcm_triplets();   // (bucket, bucket, weight)
//! assert!(!dtm.is_empty());
//! assert!(!tcm.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`hash`]: Seeded bucket and polarity-sign hashing
//! - [`sparse`]: Sparse triplet accumulation with addition-on-duplicate
//! - [`window`]: Sliding-window co-occurrence counting and context modes
//! - [`corpus`]: Streaming per-document corpus accumulation
//! - [`tokenize`]: Tokenization front-end
//! - [`ngram`]: Stop-word-aware n-gram generation
//! - [`vectorize`]: Raw-text convenience pipeline

pub mod corpus;
pub mod error;
pub mod hash;
pub mod ngram;
pub mod prelude;
pub mod sparse;
pub mod tokenize;
pub mod vectorize;
pub mod window;

#[cfg(test)]
mod corpus_proptests;
#[cfg(test)]
mod tests_corpus_contract;

pub use corpus::HashingCorpus;
pub use error::{PicarError, Result};
pub use sparse::SparseTripletMatrix;
pub use window::ContextMode;
