// =========================================================================
// FALSIFY-HC: HashingCorpus contract (picar corpus)
//
// Five-Whys:
//   Why 1: hashed vectorization bugs surface as silently skewed
//          matrices, not as crashes
//   Why 2: bucket collisions make example-based assertions fragile,
//          so the invariants themselves need direct tests
//   Why 3: the window enumeration has boundary cases (document edges,
//          zero windows, single-term documents) easy to regress
//   Why 4: symmetric folding and signed hashing both rewrite
//          coordinates on the way into storage
//   Why 5: counters and matrix growth are updated on separate paths
//          and can drift apart
//
// References:
//   - Weinberger et al. (2009) "Feature Hashing for Large Scale
//     Multitask Learning"
//   - Pennington et al. (2014) "GloVe: Global Vectors for Word
//     Representation"
// =========================================================================

use crate::corpus::HashingCorpus;
use crate::hash::FeatureHasher;
use crate::window::ContextMode;

fn corpus(bucket_count: u32, window_size: usize) -> HashingCorpus {
    HashingCorpus::new(bucket_count)
        .expect("valid bucket_count")
        .with_window_size(window_size)
}

/// FALSIFY-HC-001: Bucket and sign hashing are pure functions of the
/// term string.
#[test]
fn falsify_hc_001_hash_determinism() {
    let hasher = FeatureHasher::new(1000).expect("valid bucket_count");
    for term in ["casa", "", "the_cat", "ñandú"] {
        let buckets: Vec<u32> = (0..5).map(|_| hasher.bucket(term)).collect();
        assert!(
            buckets.windows(2).all(|w| w[0] == w[1]),
            "FALSIFIED HC-001: bucket for {term:?} varied across calls"
        );
        let signs: Vec<i32> = (0..5).map(|_| hasher.sign(term)).collect();
        assert!(
            signs.windows(2).all(|w| w[0] == w[1]),
            "FALSIFIED HC-001: sign for {term:?} varied across calls"
        );
    }
}

/// FALSIFY-HC-002: Coordinate-wise accumulation is additive — two
/// shards merged equal one accumulator that saw both inputs.
#[test]
fn falsify_hc_002_additivity_under_merge() {
    let docs = [vec!["a", "b", "c"], vec!["b", "c", "d", "a"]];

    let mut whole = corpus(64, 2);
    whole.insert_document_batch(&docs, true, ContextMode::Symmetric);

    let mut shard_a = corpus(64, 2);
    let mut shard_b = corpus(64, 2);
    shard_a.insert_document(&docs[0], true, ContextMode::Symmetric);
    shard_b.insert_document(&docs[1], true, ContextMode::Symmetric);

    let mut merged = shard_a.tcm().clone();
    merged.merge(shard_b.tcm()).expect("same shape");

    let merged_triplets = merged.triplets();
    let whole_triplets = whole.tcm_triplets();
    assert_eq!(
        merged_triplets.len(),
        whole_triplets.len(),
        "FALSIFIED HC-002: merged TCM has different support"
    );
    for (&(r1, c1, w1), &(r2, c2, w2)) in merged_triplets.iter().zip(&whole_triplets) {
        assert_eq!((r1, c1), (r2, c2), "FALSIFIED HC-002: coordinate drift");
        assert!(
            (w1 - w2).abs() < 1e-6,
            "FALSIFIED HC-002: weight drift at ({r1},{c1}): {w1} vs {w2}"
        );
    }
}

/// FALSIFY-HC-003: N inserted documents produce exactly N DTM rows,
/// regardless of window size or context mode.
#[test]
fn falsify_hc_003_row_growth_invariant() {
    for window_size in [0, 1, 4] {
        for mode in [
            ContextMode::Symmetric,
            ContextMode::Forward,
            ContextMode::Backward,
        ] {
            let mut c = corpus(32, window_size);
            for i in 0..5 {
                let doc = vec![format!("t{i}"), format!("u{i}")];
                c.insert_document(&doc, true, mode);
            }
            assert_eq!(
                c.dtm().n_rows(),
                5,
                "FALSIFIED HC-003: W={window_size} mode={mode} rows != docs"
            );
        }
    }
}

/// FALSIFY-HC-004: In symmetric mode no off-diagonal coordinate is
/// populated in both orders.
#[test]
fn falsify_hc_004_symmetric_folding() {
    let mut c = corpus(8, 3);
    // Small bucket space forces plenty of repeated and colliding pairs.
    let doc: Vec<String> = (0..40).map(|i| format!("w{}", i % 11)).collect();
    c.insert_document(&doc, true, ContextMode::Symmetric);

    let entries = c.tcm_triplets();
    assert!(!entries.is_empty());
    for &(row, col, _) in &entries {
        assert!(
            row <= col,
            "FALSIFIED HC-004: entry ({row},{col}) below the diagonal"
        );
    }
}

/// FALSIFY-HC-005: Total co-occurrence increments for a K-term document
/// equal sum over i of min(W, K-1-i).
#[test]
fn falsify_hc_005_window_boundary_count() {
    for k in [0usize, 1, 2, 5, 9] {
        for window_size in [0usize, 1, 3, 12] {
            let doc: Vec<String> = (0..k).map(|i| format!("v{i}")).collect();
            let mut c = corpus(64, window_size).with_weighting(|_| 1.0);
            c.insert_document(&doc, true, ContextMode::Forward);

            let total: f32 = c.tcm_triplets().iter().map(|&(_, _, w)| w).sum();
            let expected: usize = (0..k).map(|i| window_size.min(k - 1 - i)).sum();
            assert!(
                (total - expected as f32).abs() < 1e-6,
                "FALSIFIED HC-005: K={k} W={window_size}: {total} != {expected}"
            );
        }
    }
}

/// FALSIFY-HC-006: token_count equals the sum of document lengths,
/// including TCM-only (grow_dtm=false) passes.
#[test]
fn falsify_hc_006_token_count_invariant() {
    let mut c = corpus(64, 2);
    let mut expected = 0;
    for (i, grow_dtm) in [true, false, true, false, false].iter().enumerate() {
        let doc: Vec<String> = (0..=i).map(|j| format!("d{i}_{j}")).collect();
        expected += doc.len();
        c.insert_document(&doc, *grow_dtm, ContextMode::Symmetric);
    }
    assert_eq!(
        c.token_count(),
        expected,
        "FALSIFIED HC-006: token_count drifted from inserted lengths"
    );
}

/// FALSIFY-HC-007: The worked forward-window example — 3 terms, W=2 —
/// yields 3 weighted pairs, 3 tokens, and 1 DTM row.
#[test]
fn falsify_hc_007_worked_example() {
    let mut c = corpus(100, 2);
    c.insert_document(&["the", "cat", "sat"], true, ContextMode::Forward);

    let mass: f32 = c.tcm_triplets().iter().map(|&(_, _, w)| w).sum();
    assert!(
        (mass - 2.5).abs() < 1e-6,
        "FALSIFIED HC-007: expected weight mass 2.5 (1 + 1 + 1/2), got {mass}"
    );
    assert_eq!(c.token_count(), 3, "FALSIFIED HC-007: token_count != 3");
    assert_eq!(c.doc_count(), 1, "FALSIFIED HC-007: doc_count != 1");
    assert_eq!(c.dtm().n_rows(), 1, "FALSIFIED HC-007: DTM rows != 1");
}
