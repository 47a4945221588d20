use crate::error::{Error, Result};
use crate::index::{DocId, DocLengths, Postings};
use crate::query::QueryVector;
use crate::tokenizer::log_tf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of hits returned by [`rank`].
pub const MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64, // cosine similarity
}

/// Rank documents against `query` and keep the best [`MAX_RESULTS`].
pub fn rank(query: &QueryVector, postings: &Postings, doc_lengths: &DocLengths) -> Result<Vec<ScoredDoc>> {
    rank_top_k(query, postings, doc_lengths, MAX_RESULTS)
}

/// Cosine-rank documents with lnc document weights against an ltc query.
///
/// Results are sorted by descending score, ties by ascending document id.
/// Every document sharing a query term is scored, including those whose only
/// shared terms carry zero weight. Zero-length documents are left out.
/// Query terms are visited in term order so sums are identical across runs.
pub fn rank_top_k(query: &QueryVector, postings: &Postings, doc_lengths: &DocLengths, k: usize) -> Result<Vec<ScoredDoc>> {
    let mut scores: HashMap<&str, f64> = HashMap::new();
    for (term, q_w) in query.iter() {
        let Some(plist) = postings.get(term) else { continue };
        for p in plist {
            *scores.entry(p.doc_id.as_str()).or_insert(0.0) += q_w * log_tf(p.term_freq);
        }
    }

    let mut scored: Vec<ScoredDoc> = Vec::with_capacity(scores.len());
    for (doc_id, dot) in scores {
        let length = *doc_lengths
            .get(doc_id)
            .ok_or_else(|| Error::IndexCorruption { doc_id: doc_id.to_string() })?;
        if length <= 0.0 {
            continue;
        }
        scored.push(ScoredDoc { doc_id: doc_id.to_string(), score: dot / length });
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.doc_id.cmp(&b.doc_id)));
    scored.truncate(k);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{build_index, Posting};

    #[test]
    fn ties_break_by_ascending_doc_id() {
        let idx = build_index(vec![("c", "x y"), ("a", "x y"), ("b", "x y"), ("d", "y")]).unwrap();
        let hits = idx.search("x").unwrap();
        let ids: Vec<&str> = hits.iter().map(|h| h.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(hits.windows(2).all(|w| w[0].score == w[1].score));
    }

    #[test]
    fn score_matches_cosine_formula() {
        let idx = build_index(vec![("d1", "cat cat mouse"), ("d2", "dog")]).unwrap();
        let hits = idx.search("cat").unwrap();
        assert_eq!(hits.len(), 1);
        let w = 1.0 + 2f64.ln();
        let expected = w / (w * w + 1.0).sqrt();
        assert!((hits[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_query_vector_ranks_nothing() {
        let idx = build_index(vec![("d", "a b")]).unwrap();
        let hits = rank(&QueryVector::default(), idx.postings(), idx.doc_lengths()).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn missing_doc_length_is_corruption() {
        let idx = build_index(vec![("d1", "a"), ("d2", "b")]).unwrap();
        let qv = idx.vectorize("a");
        let mut postings = idx.postings().clone();
        postings.get_mut("a").unwrap().push(Posting { doc_id: "ghost".into(), term_freq: 1 });
        let err = rank(&qv, &postings, idx.doc_lengths()).unwrap_err();
        assert_eq!(err, Error::IndexCorruption { doc_id: "ghost".into() });
    }

    #[test]
    fn zero_length_document_is_excluded() {
        let idx = build_index(vec![("d1", "a"), ("d2", "b")]).unwrap();
        let qv = idx.vectorize("a");
        let mut postings = idx.postings().clone();
        postings.get_mut("a").unwrap().push(Posting { doc_id: "d2".into(), term_freq: 1 });
        let mut lengths = idx.doc_lengths().clone();
        lengths.insert("d2".into(), 0.0);
        let hits = rank(&qv, &postings, &lengths).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].doc_id, "d1");
        assert!(hits[0].score.is_finite());
    }

    #[test]
    fn top_k_truncates() {
        let mut docs: Vec<(String, String)> = (0..5).map(|i| (format!("d{i}"), "w".to_string())).collect();
        docs.push(("other".into(), "v".into()));
        let idx = build_index(docs).unwrap();
        assert_eq!(idx.search_top_k("w", 3).unwrap().len(), 3);
        assert_eq!(idx.search_top_k("w", 0).unwrap().len(), 0);
    }
}
