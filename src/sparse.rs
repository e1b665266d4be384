//! Sparse coordinate (triplet) accumulation.
//!
//! `SparseTripletMatrix` is the mutable, append/merge sparse structure
//! behind both vectorization outputs: the document-term matrix (signed
//! integer counts) and the term-co-occurrence matrix (floating-point
//! weights). Writing to an occupied coordinate adds to the stored value
//! rather than overwriting it, so accumulation is commutative and
//! associative per coordinate.
//!
//! The row dimension is grown explicitly by the owner (one row per
//! completed document), independent of which coordinates were written.
//!
//! # Examples
//!
//! ```
//! use picar::sparse::SparseTripletMatrix;
//!
//! let mut m: SparseTripletMatrix<i32> = SparseTripletMatrix::new(0, 4);
//! m.add(0, 1, 1);
//! m.add(0, 1, 1);
//! m.increment_nrows();
//!
//! assert_eq!(m.nnz(), 1);
//! assert_eq!(m.triplets(), vec![(0, 1, 2)]);
//! ```

use std::collections::HashMap;
use std::ops::AddAssign;

use crate::error::{PicarError, Result};

/// Sparse matrix in coordinate form with addition-on-duplicate
/// semantics.
///
/// Generic over the stored value type: `i32` for term counts, `f32`
/// for co-occurrence weights.
#[derive(Debug, Clone, Default)]
pub struct SparseTripletMatrix<T> {
    entries: HashMap<(usize, usize), T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Copy + AddAssign> SparseTripletMatrix<T> {
    /// Create an empty matrix with the given dimensions.
    #[must_use]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            entries: HashMap::new(),
            nrows,
            ncols,
        }
    }

    /// Insert or accumulate a value at `(row, col)`.
    ///
    /// If the coordinate is already occupied, `value` is added to the
    /// existing entry.
    pub fn add(&mut self, row: usize, col: usize, value: T) {
        self.entries
            .entry((row, col))
            .and_modify(|v| *v += value)
            .or_insert(value);
    }

    /// Number of distinct coordinates stored.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether no coordinates are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row dimension.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.nrows
    }

    /// Column dimension.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.ncols
    }

    /// Grow the row dimension by one.
    ///
    /// Called by the owner after each completed document, whether or
    /// not the document wrote any coordinates into that row.
    pub fn increment_nrows(&mut self) {
        self.nrows += 1;
    }

    /// Remove all stored coordinates, preserving dimensions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot the stored coordinates as `(row, col, value)` triplets,
    /// sorted by row then column.
    ///
    /// Sorting makes repeated exports of the same state identical, so
    /// downstream matrix construction is deterministic.
    #[must_use]
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        let mut out: Vec<(usize, usize, T)> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
            .collect();
        out.sort_by_key(|&(row, col, _)| (row, col));
        out
    }

    /// Value stored at `(row, col)`, if any.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    /// Merge another matrix of the same shape by coordinate-wise
    /// addition.
    ///
    /// Addition is commutative and associative, so merging shards in
    /// any order yields the same result. This is the extension point
    /// for shard-per-worker parallel ingestion.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(PicarError::DimensionMismatch {
                expected: format!("{}x{}", self.nrows, self.ncols),
                actual: format!("{}x{}", other.nrows, other.ncols),
            });
        }
        for (&(row, col), &value) in &other.entries {
            self.add(row, col, value);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sparse_tests.rs"]
mod tests;
