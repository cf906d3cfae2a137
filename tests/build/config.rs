//! Config files driving a load end to end.

use super::common::vocab_file;
use suggestrix::{load_index, lookup_with, ConfigError, CorrectionStrategy, LookupKind, SuggestConfig};

#[test]
fn test_config_file_drives_load_and_lookup() {
    let vocab = vocab_file("word;count\ncat;10\ncar;10\ncart;5\n");
    let config_json = format!(
        r#"{{
            "vocabulary": {:?},
            "maxDistance": 1,
            "strategy": "exhaustive",
            "recordUsage": false,
            "feed": {{ "delimiter": ";" }}
        }}"#,
        vocab.path()
    );
    let config_file = vocab_file(&config_json);

    let config = SuggestConfig::resolve(Some(config_file.path())).unwrap();
    assert_eq!(config.max_distance, 1);
    assert_eq!(config.strategy, CorrectionStrategy::Exhaustive);
    assert!(config.feed.has_header);

    let path = config.vocabulary.clone().unwrap();
    let mut index = load_index(&path, &config.feed).unwrap();
    let options = config.lookup_options();

    let result = lookup_with(&mut index, "kat", &options);
    assert_eq!(result.kind, LookupKind::Autocorrect);
    assert_eq!(result.words(), vec!["cat"]);

    lookup_with(&mut index, "cart", &options);
    assert_eq!(index.stats().total_usage_frequency, 0);
}

#[test]
fn test_malformed_config_is_an_error() {
    let config_file = vocab_file("{ \"maxDistance\": \"two\" }");
    let err = SuggestConfig::resolve(Some(config_file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid config"));
}
