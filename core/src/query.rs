use crate::index::{DocFreq, Term};
use crate::tokenizer::{log_tf, term_counts};
use std::collections::BTreeMap;

/// Unit-normalized ltc weights of the query terms that occur in the corpus,
/// kept in term order.
///
/// Empty when the query shares no vocabulary with the corpus, or when every
/// shared term has zero idf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVector {
    weights: BTreeMap<Term, f64>,
}

impl QueryVector {
    pub fn weights(&self) -> &BTreeMap<Term, f64> { &self.weights }
    pub fn weight(&self, term: &str) -> Option<f64> { self.weights.get(term).copied() }
    pub fn len(&self) -> usize { self.weights.len() }
    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }
}

/// Un-normalized `(1 + ln tf) * ln(N / df)` weight for each in-vocabulary
/// query term. Out-of-vocabulary terms are dropped.
pub fn term_weights(query: &str, doc_freq: &DocFreq, num_docs: u32) -> BTreeMap<Term, f64> {
    let n = num_docs as f64;
    term_counts(query)
        .into_iter()
        .filter_map(|(term, tf)| {
            let df = *doc_freq.get(&term)?;
            let idf = (n / df as f64).ln();
            Some((term, log_tf(tf) * idf))
        })
        .collect()
}

/// Build the normalized query vector for `query`.
pub fn vectorize(query: &str, doc_freq: &DocFreq, num_docs: u32) -> QueryVector {
    let mut weights = term_weights(query, doc_freq, num_docs);
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        tracing::debug!(query, "query has no weighted terms in vocabulary");
        return QueryVector::default();
    }
    for w in weights.values_mut() {
        *w /= norm;
    }
    QueryVector { weights }
}
