#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::corpus::HashingCorpus;
    use crate::hash::FeatureHasher;
    use crate::window::ContextMode;

    fn docs_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(
            prop::collection::vec("[a-z]{1,6}", 0..12),
            0..6,
        )
    }

    proptest! {
        /// Bucket hashing is deterministic and in range for any term.
        #[test]
        fn prop_bucket_deterministic_and_in_range(
            term in ".{0,24}",
            bucket_count in 1u32..10_000
        ) {
            let hasher = FeatureHasher::new(bucket_count).expect("bucket_count > 0");
            let first = hasher.bucket(&term);
            prop_assert!(first < bucket_count);
            prop_assert_eq!(first, hasher.bucket(&term));
            prop_assert_eq!(hasher.sign(&term), hasher.sign(&term));
        }

        /// Total co-occurrence increments follow the window boundary
        /// formula for any document length and window size.
        #[test]
        fn prop_window_boundary_count(
            doc in prop::collection::vec("[a-z]{1,5}", 0..30),
            window_size in 0usize..9
        ) {
            let mut c = HashingCorpus::new(128)
                .expect("bucket_count > 0")
                .with_window_size(window_size)
                .with_weighting(|_| 1.0);
            c.insert_document(&doc, true, ContextMode::Forward);

            let total: f64 = c
                .tcm_triplets()
                .iter()
                .map(|&(_, _, w)| f64::from(w))
                .sum();
            let k = doc.len();
            let expected: usize = (0..k).map(|i| window_size.min(k - 1 - i)).sum();
            prop_assert!((total - expected as f64).abs() < 1e-3);
        }

        /// token_count is the sum of document lengths and doc_count the
        /// number of documents, for any batch.
        #[test]
        fn prop_counters_track_input(docs in docs_strategy()) {
            let mut c = HashingCorpus::new(64)
                .expect("bucket_count > 0")
                .with_window_size(2);
            c.insert_document_batch(&docs, true, ContextMode::Symmetric);

            let expected_tokens: usize = docs.iter().map(Vec::len).sum();
            prop_assert_eq!(c.token_count(), expected_tokens);
            prop_assert_eq!(c.doc_count(), docs.len());
            prop_assert_eq!(c.dtm().n_rows(), docs.len());
        }

        /// Ingesting the same batch twice yields identical exports.
        #[test]
        fn prop_ingestion_deterministic(docs in docs_strategy()) {
            let mut first = HashingCorpus::new(64)
                .expect("bucket_count > 0")
                .with_window_size(2);
            let mut second = HashingCorpus::new(64)
                .expect("bucket_count > 0")
                .with_window_size(2);
            first.insert_document_batch(&docs, true, ContextMode::Symmetric);
            second.insert_document_batch(&docs, true, ContextMode::Symmetric);

            prop_assert_eq!(first.dtm_triplets(), second.dtm_triplets());
            prop_assert_eq!(first.tcm_triplets(), second.tcm_triplets());
        }

        /// TCM sharding: splitting a batch across two corpora and
        /// merging coordinate-wise matches single-corpus ingestion.
        #[test]
        fn prop_tcm_merge_additivity(
            docs in docs_strategy(),
            split in 0usize..7
        ) {
            let split = split.min(docs.len());

            let mut whole = HashingCorpus::new(32)
                .expect("bucket_count > 0")
                .with_window_size(3);
            whole.insert_document_batch(&docs, true, ContextMode::Symmetric);

            let mut shard_a = HashingCorpus::new(32)
                .expect("bucket_count > 0")
                .with_window_size(3);
            let mut shard_b = HashingCorpus::new(32)
                .expect("bucket_count > 0")
                .with_window_size(3);
            shard_a.insert_document_batch(&docs[..split], true, ContextMode::Symmetric);
            shard_b.insert_document_batch(&docs[split..], true, ContextMode::Symmetric);

            let mut merged = shard_a.tcm().clone();
            merged.merge(shard_b.tcm()).expect("same shape");

            let merged_triplets = merged.triplets();
            let whole_triplets = whole.tcm_triplets();
            prop_assert_eq!(merged_triplets.len(), whole_triplets.len());
            for (&(r1, c1, w1), &(r2, c2, w2)) in
                merged_triplets.iter().zip(&whole_triplets)
            {
                prop_assert_eq!((r1, c1), (r2, c2));
                prop_assert!((w1 - w2).abs() < 1e-4);
            }
        }
    }
}
