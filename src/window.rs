//! Sliding-window co-occurrence counting.
//!
//! For each position in a document's bucket sequence, the builder
//! enumerates forward-looking pairs up to `window_size` positions away
//! and routes a distance-weighted increment into the term-co-occurrence
//! accumulator according to the context policy:
//!
//! - `Symmetric`: fold onto the upper triangle by storing the smaller
//!   bucket index first. Diagonal entries (a term co-occurring with
//!   itself through a hash collision) are retained, not suppressed.
//! - `Forward`: only right-context pairs, asymmetric matrix.
//! - `Backward`: mirrors forward with the roles swapped.
//!
//! Windows never wrap across document boundaries, and the last
//! `window_size` positions naturally produce fewer pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PicarError, Result};
use crate::sparse::SparseTripletMatrix;

/// Which neighboring terms contribute to co-occurrence counts.
///
/// Parsing from text rejects unknown names, so a misconfigured binding
/// layer fails at the boundary instead of silently counting wrong.
///
/// # Examples
///
/// ```
/// use picar::window::ContextMode;
///
/// let mode: ContextMode = "symmetric".parse().expect("known mode");
/// assert_eq!(mode, ContextMode::Symmetric);
/// assert!("sideways".parse::<ContextMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Both directions, folded onto the upper triangle.
    Symmetric,
    /// Right context only.
    Forward,
    /// Left context only.
    Backward,
}

impl Default for ContextMode {
    fn default() -> Self {
        ContextMode::Symmetric
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextMode::Symmetric => "symmetric",
            ContextMode::Forward => "forward",
            ContextMode::Backward => "backward",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ContextMode {
    type Err = PicarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "symmetric" => Ok(ContextMode::Symmetric),
            "forward" => Ok(ContextMode::Forward),
            "backward" => Ok(ContextMode::Backward),
            other => Err(PicarError::invalid_hyperparameter(
                "context_mode",
                other,
                "one of: symmetric, forward, backward",
            )),
        }
    }
}

/// Harmonic distance decay `1/j`, the default co-occurrence weighting.
///
/// Nearer context words carry more weight; a term one position away
/// contributes `1.0`, two positions away `0.5`, and so on.
///
/// # Examples
///
/// ```
/// use picar::window::harmonic_decay;
///
/// assert!((harmonic_decay(1) - 1.0).abs() < f32::EPSILON);
/// assert!((harmonic_decay(4) - 0.25).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn harmonic_decay(distance: usize) -> f32 {
    1.0 / distance as f32
}

/// Accumulate windowed co-occurrence increments for one document.
///
/// `buckets` is the document's ordered sequence of hashed bucket
/// indices. For each position `i` and offset `j in [1, window_size]`
/// with `i + j` inside the document, `weighting(j)` is routed into
/// `tcm` under the given mode. `window_size == 0` and documents of
/// length 0 or 1 produce no pairs.
pub fn accumulate_window<F>(
    buckets: &[usize],
    window_size: usize,
    mode: ContextMode,
    weighting: F,
    tcm: &mut SparseTripletMatrix<f32>,
) where
    F: Fn(usize) -> f32,
{
    let k = buckets.len();
    for (i, &term_index) in buckets.iter().enumerate() {
        for j in 1..=window_size {
            if i + j >= k {
                break;
            }
            let context_index = buckets[i + j];
            let increment = weighting(j);
            match mode {
                ContextMode::Symmetric => {
                    // Upper-triangle folding; diagonal collisions kept.
                    if term_index < context_index {
                        tcm.add(term_index, context_index, increment);
                    } else {
                        tcm.add(context_index, term_index, increment);
                    }
                }
                ContextMode::Forward => {
                    tcm.add(term_index, context_index, increment);
                }
                ContextMode::Backward => {
                    tcm.add(context_index, term_index, increment);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
