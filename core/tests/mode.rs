use quill_core::types::{MatchMode, Strategy, decode_results};

#[test]
fn test_default_mode_is_multi_word_literal() {
    assert_eq!(MatchMode::default(), MatchMode::TERMS);
    assert_eq!(MatchMode::default().strategy(), Strategy::Terms);
}

#[test]
fn test_fuzzy_takes_precedence_over_exact() {
    let mode = MatchMode {
        exact: true,
        fuzzy: true,
    };
    assert_eq!(mode.strategy(), Strategy::Fuzzy);
}

#[test]
fn test_exact_without_fuzzy_is_phrase() {
    assert_eq!(MatchMode::PHRASE.strategy(), Strategy::Phrase);
}

#[test]
fn test_from_multi_flags() {
    assert_eq!(MatchMode::from_multi(true, false), MatchMode::TERMS);
    assert_eq!(MatchMode::from_multi(false, false), MatchMode::PHRASE);
    assert_eq!(MatchMode::from_multi(true, true).strategy(), Strategy::Fuzzy);
}

#[test]
fn test_mode_deserializes_with_missing_flags() {
    let mode: MatchMode = serde_json::from_str(r#"{"fuzzy": true}"#).unwrap();
    assert_eq!(mode, MatchMode::FUZZY);

    let mode: MatchMode = serde_json::from_str("{}").unwrap();
    assert_eq!(mode, MatchMode::TERMS);
}

#[test]
fn test_decode_results_array() {
    let results = decode_results(r#"["to be, or not", "that is\nthe question"]"#).unwrap();
    assert_eq!(results, ["to be, or not", "that is\nthe question"]);

    assert!(decode_results("[]").unwrap().is_empty());
    decode_results(r#"{"q": 1}"#).unwrap_err();
}
