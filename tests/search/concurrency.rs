//! `SharedIndex` under concurrent readers and writers.

use std::thread;

use super::common::{assert_index_well_formed, cat_index, fruit_index, synthetic_vocabulary};
use suggestrix::{LookupKind, LookupOptions, SharedIndex};

#[test]
fn test_concurrent_lookups_count_every_use() {
    let shared = SharedIndex::new(fruit_index());
    let options = LookupOptions::default();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    let result = shared.lookup("batch", &options);
                    assert_eq!(result.kind, LookupKind::Autocomplete);
                    shared.lookup("ap", &options);
                    shared.lookup("bnad", &options);
                }
            });
        }
    });

    let index = shared.into_inner();
    assert_eq!(index.entry("batch").unwrap().usage_frequency, 400);
    assert_eq!(index.stats().total_usage_frequency, 400);
    assert_eq!(index.global_top_list()[0].word, "batch");
    assert_index_well_formed(&index);
}

#[test]
fn test_readers_never_see_torn_caches() {
    let shared = SharedIndex::new(cat_index());
    let vocab = synthetic_vocabulary(500, &['c', 'a', 'r', 't', 's'], 6, 11);

    thread::scope(|s| {
        s.spawn(|| {
            for (word, weight) in &vocab {
                shared.insert(word, *weight).unwrap();
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..200 {
                    for prefix in ["", "c", "ca", "car"] {
                        let top = if prefix.is_empty() {
                            shared.global_top_list()
                        } else {
                            shared.top_suggestions_at_prefix(prefix)
                        };
                        assert!(top.len() <= 5);
                        assert!(top.windows(2).all(|p| p[0] < p[1]));
                    }
                }
            });
        }
    });

    assert_index_well_formed(&shared.read());
}

#[test]
fn test_shared_usage_and_queries() {
    let shared = SharedIndex::new(cat_index());
    assert!(shared.is_valid_prefix("ca"));
    assert!(!shared.is_complete_word("ca"));
    assert!(shared.record_usage("cart"));
    assert!(!shared.record_usage("ca"));
    assert_eq!(shared.top_suggestions_at_prefix("ca")[0].word, "cart");
    assert_eq!(shared.find_corrections("kat", 1)[0].word, "cat");
}
