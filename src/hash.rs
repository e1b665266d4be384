//! Feature hashing (the "hashing trick") for text vectorization.
//!
//! Maps an unbounded vocabulary of terms onto a fixed number of buckets
//! via a seeded 32-bit hash, trading collision risk for bounded memory.
//! A second, independently seeded hash yields a polarity sign used in
//! signed-hashing mode so that colliding terms partially cancel instead
//! of purely accumulating.
//!
//! Both hashes are pure functions of the term's UTF-8 bytes: identical
//! strings always land in the same bucket with the same sign.
//!
//! # Examples
//!
//! ```
//! use picar::hash::FeatureHasher;
//!
//! let hasher = FeatureHasher::new(128).expect("bucket_count > 0");
//!
//! let a = hasher.bucket("gato");
//! assert!(a < 128);
//! assert_eq!(a, hasher.bucket("gato"));
//!
//! let sign = hasher.sign("gato");
//! assert!(sign == 1 || sign == -1);
//! ```

use xxhash_rust::xxh32::xxh32;

use crate::error::{PicarError, Result};

/// Seed for the bucket hash, fixed for the lifetime of the crate.
const BUCKET_SEED: u32 = 3_120_602_769;

/// Seed for the sign hash. Independent of the bucket seed so bucket
/// assignment and sign assignment are not perfectly correlated.
const SIGN_SEED: u32 = 79_193_439;

/// Hashes term strings to bucket indices and polarity signs.
///
/// # Examples
///
/// ```
/// use picar::hash::FeatureHasher;
///
/// let hasher = FeatureHasher::new(64).expect("bucket_count > 0");
/// assert_eq!(hasher.bucket_count(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureHasher {
    bucket_count: u32,
}

impl FeatureHasher {
    /// Create a hasher over `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `bucket_count` is zero.
    pub fn new(bucket_count: u32) -> Result<Self> {
        if bucket_count == 0 {
            return Err(PicarError::invalid_hyperparameter(
                "bucket_count",
                bucket_count,
                ">0",
            ));
        }
        Ok(Self { bucket_count })
    }

    /// Number of buckets this hasher maps into.
    #[must_use]
    pub fn bucket_count(&self) -> u32 {
        self.bucket_count
    }

    /// Hash a term to its bucket index in `[0, bucket_count)`.
    ///
    /// Deterministic and total: the empty string hashes to an ordinary
    /// bucket like any other input.
    #[must_use]
    pub fn bucket(&self, term: &str) -> u32 {
        xxh32(term.as_bytes(), BUCKET_SEED) % self.bucket_count
    }

    /// Hash a term to its polarity sign, `+1` or `-1`.
    ///
    /// `-1` when the signed interpretation of the second hash is
    /// negative. Used only in signed-hashing mode.
    #[must_use]
    pub fn sign(&self, term: &str) -> i32 {
        if (xxh32(term.as_bytes(), SIGN_SEED) as i32) < 0 {
            -1
        } else {
            1
        }
    }
}

/// Hash a batch of terms to bucket indices, independent of any corpus
/// state. Useful for pre-hashing a fixed vocabulary.
///
/// # Errors
///
/// Returns `InvalidHyperparameter` if `bucket_count` is zero.
///
/// # Examples
///
/// ```
/// use picar::hash::{hash_many, FeatureHasher};
///
/// let buckets = hash_many(&["the", "cat", "sat"], 100).expect("bucket_count > 0");
/// assert_eq!(buckets.len(), 3);
///
/// let hasher = FeatureHasher::new(100).expect("bucket_count > 0");
/// assert_eq!(buckets[1], hasher.bucket("cat"));
/// ```
pub fn hash_many<S: AsRef<str>>(terms: &[S], bucket_count: u32) -> Result<Vec<u32>> {
    let hasher = FeatureHasher::new(bucket_count)?;
    Ok(terms.iter().map(|t| hasher.bucket(t.as_ref())).collect())
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
