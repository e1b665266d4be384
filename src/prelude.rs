//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use picar::prelude::*;
//! ```

pub use crate::corpus::HashingCorpus;
pub use crate::error::{PicarError, Result};
pub use crate::hash::{hash_many, FeatureHasher};
pub use crate::sparse::SparseTripletMatrix;
pub use crate::tokenize::{Tokenizer, WhitespaceTokenizer};
pub use crate::vectorize::HashingVectorizer;
pub use crate::window::{harmonic_decay, ContextMode};
