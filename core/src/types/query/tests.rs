use super::*;

#[test]
fn term_accepts_phrase_with_inner_spaces() {
    let term = Term::try_from("quick fox").unwrap();
    assert_eq!(term.as_str(), "quick fox");
}

#[test]
fn term_keeps_surrounding_whitespace() {
    let term = Term::try_from(" fox ").unwrap();
    assert_eq!(term.as_str(), " fox ");
}

#[test]
fn term_rejects_empty_string() {
    Term::try_from("").unwrap_err();
}

#[test]
fn term_rejects_whitespace_string() {
    Term::try_from(" \t\n ").unwrap_err();
}

#[test]
fn query_terms_split_on_any_whitespace() {
    let query = Query::new("  quick\tbrown\nfox ");
    let terms: Vec<String> = query.terms().into_iter().map(Into::into).collect();
    assert_eq!(terms, ["quick", "brown", "fox"]);
}

#[test]
fn query_terms_are_not_deduplicated() {
    let query = Query::new("to be or not to be");
    assert_eq!(query.terms().len(), 6);
}

#[test]
fn query_phrase_is_whole_query() {
    let query = Query::new("quick fox");
    assert_eq!(query.phrase().unwrap().as_str(), "quick fox");
}

#[test]
fn empty_query_yields_nothing() {
    let query = Query::new("   ");
    assert!(query.terms().is_empty());
    assert!(query.phrase().is_none());
    assert!(query.terms_for(Strategy::Phrase).is_empty());
}

#[test]
fn terms_for_follows_strategy() {
    let query = Query::from("quick fox");
    assert_eq!(query.terms_for(Strategy::Phrase).len(), 1);
    assert_eq!(query.terms_for(Strategy::Terms).len(), 2);
    assert_eq!(query.terms_for(Strategy::Fuzzy).len(), 2);
}
