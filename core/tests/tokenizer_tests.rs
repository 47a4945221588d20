use vsm_core::tokenizer::{term_counts, tokenize};

#[test]
fn it_case_folds_without_stemming() {
    let words = tokenize("Running Runners RUN! The café's menu.");
    assert!(words.contains(&"running".to_string()));
    assert!(words.contains(&"run!".to_string()));
    assert!(words.contains(&"café's".to_string()));
    assert!(!words.contains(&"run".to_string()));
}

#[test]
fn it_keeps_stopwords() {
    let counts = term_counts("The quick brown fox and the lazy dog");
    assert_eq!(counts.get("the"), Some(&2));
    assert_eq!(counts.get("and"), Some(&1));
}
