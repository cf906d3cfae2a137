//! Loading `word,count` files into an index.

use super::common::{assert_index_well_formed, vocab_file, words_of};
use suggestrix::{load_index, load_vocabulary_file, FeedConfig, VocabError};

#[test]
fn test_load_index_from_csv() {
    let file = vocab_file("word,count\ncat,10\ncar,10\ncart,5\n");
    let index = load_index(file.path(), &FeedConfig::default()).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(words_of(&index.top_suggestions_at_prefix("ca")), vec!["car", "cat", "cart"]);
    assert_index_well_formed(&index);
}

#[test]
fn test_duplicate_rows_accumulate() {
    let file = vocab_file("word,count\ncat,4\ncar,10\ncat,7\n");
    let index = load_index(file.path(), &FeedConfig::default()).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.entry("cat").unwrap().insertion_frequency, 11);
    assert_eq!(index.global_top_list()[0].word, "cat");
}

#[test]
fn test_header_columns_in_any_order() {
    let file = vocab_file("\"frequency\",\"word\"\n\"3\",\"apple\"\n\n8, ape \n");
    let pairs = load_vocabulary_file(file.path(), &FeedConfig::default()).unwrap();
    assert_eq!(pairs, vec![("apple".to_string(), 3), ("ape".to_string(), 8)]);
}

#[test]
fn test_lenient_feed_skips_bad_rows() {
    let file = vocab_file("word,count\ncat,10\n,3\ndog,-2\nbird,lots\ncar,1\n");
    let pairs = load_vocabulary_file(file.path(), &FeedConfig::default()).unwrap();
    assert_eq!(pairs, vec![("cat".to_string(), 10), ("car".to_string(), 1)]);
}

#[test]
fn test_strict_feed_reports_line() {
    let file = vocab_file("word,count\ncat,10\ndog,-2\n");
    let config = FeedConfig {
        lenient: false,
        ..FeedConfig::default()
    };
    let err = load_vocabulary_file(file.path(), &config).unwrap_err();
    assert!(matches!(err, VocabError::InvalidWeight { line: 3, ref value } if value == "-2"));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_headerless_tab_separated() {
    let file = vocab_file("cat\t10\ncar\t2\n");
    let config = FeedConfig {
        has_header: false,
        delimiter: '\t',
        ..FeedConfig::default()
    };
    let index = load_index(file.path(), &config).unwrap();
    assert_eq!(words_of(&index.global_top_list()), vec!["cat", "car"]);
}

#[test]
fn test_quantile_cut_drops_rare_words() {
    let file = vocab_file("word,count\na,1\nb,2\nc,3\nd,4\ne,5\n");
    let config = FeedConfig {
        min_quantile: Some(0.2),
        ..FeedConfig::default()
    };
    // 20th percentile of 1..=5 is 1.8
    let index = load_index(file.path(), &config).unwrap();
    assert_eq!(index.len(), 4);
    assert!(!index.is_complete_word("a"));
    assert!(index.is_complete_word("b"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_vocabulary_file(std::path::Path::new("/nonexistent/words.csv"), &FeedConfig::default())
        .unwrap_err();
    assert!(matches!(err, VocabError::Io(_)));
}

#[test]
fn test_quoted_words_load_into_index() {
    let file = vocab_file("word,count\n\"new york\",5\n\"a,b\",3\n\"say \"\"hi\"\"\",2\n\"new york\",1\n");
    let config = FeedConfig {
        lenient: false,
        ..FeedConfig::default()
    };
    let index = load_index(file.path(), &config).unwrap();

    assert_eq!(index.len(), 3);
    assert!(index.is_complete_word("a,b"));
    assert!(index.is_complete_word("say \"hi\""));
    assert_eq!(index.entry("new york").unwrap().insertion_frequency, 6);
    assert_eq!(words_of(&index.top_suggestions_at_prefix("new ")), vec!["new york"]);
    assert_index_well_formed(&index);
}
