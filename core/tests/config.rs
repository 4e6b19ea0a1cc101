use quill_core::types::{AppConfig, SeparatorPolicy, Strategy};
use tempfile::tempdir;

#[test]
fn test_missing_file_yields_defaults() {
    let tmp = tempdir().unwrap();
    let config = AppConfig::load(&AppConfig::path(tmp.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.corpus.context_bytes, 250);
    assert_eq!(config.corpus.context_words, 35);
    assert_eq!(config.corpus.max_hits_per_term, 500);
    assert!(config.corpus.shuffle);
    assert_eq!(config.highlight.mark_class, "bg-yellow-300 tracking-tighter");
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = tempdir().unwrap();
    let path = AppConfig::path(tmp.path());
    std::fs::write(
        &path,
        "[highlight]\nseparators = \"never\"\n\n[corpus]\ncontext_words = 10\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.highlight.separators, SeparatorPolicy::Never);
    assert_eq!(config.highlight.container_class, "p-5 w-1/2");
    assert_eq!(config.corpus.context_words, 10);
    assert_eq!(config.corpus.context_bytes, 250);
}

#[test]
fn test_save_then_load_preserves_values() {
    let tmp = tempdir().unwrap();
    let path = AppConfig::path(tmp.path());

    let mut config = AppConfig::default();
    config.highlight.mark_class = "hit".to_string();
    config.corpus.shuffle = false;
    config.save(&path).unwrap();

    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let tmp = tempdir().unwrap();
    let path = AppConfig::path(tmp.path());
    std::fs::write(&path, "[corpus\ncontext_words = ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("parse error"));
}

#[test]
fn test_validate_reports_zero_limits() {
    let mut config = AppConfig::default();
    assert!(config.validate().is_empty());

    config.corpus.context_words = 0;
    config.corpus.max_hits_per_term = 0;

    let errors = config.validate();
    assert_eq!(errors.len(), 2);

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert_eq!(fixed.corpus.context_words, 35);
    assert_eq!(fixed.corpus.max_hits_per_term, 500);
}

#[test]
fn test_separator_policy_by_mode() {
    let policy = SeparatorPolicy::ByMode;
    assert!(!policy.emits_for(Strategy::Phrase));
    assert!(policy.emits_for(Strategy::Terms));
    assert!(policy.emits_for(Strategy::Fuzzy));

    assert!(SeparatorPolicy::Always.emits_for(Strategy::Phrase));
    assert!(!SeparatorPolicy::Never.emits_for(Strategy::Fuzzy));
}
