use crate::error::{Error, Result};
use crate::query::{vectorize, QueryVector};
use crate::rank::{rank_top_k, ScoredDoc, MAX_RESULTS};
use crate::tokenizer::{log_tf, term_counts};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type DocId = String;
pub type Term = String;

/// Documents keyed by identifier. Iterates in identifier order.
pub type Corpus = BTreeMap<DocId, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32, // raw count within the document
}

pub type Postings = HashMap<Term, Vec<Posting>>;
pub type DocFreq = HashMap<Term, u32>;
pub type DocLengths = HashMap<DocId, f64>;

/// Immutable inverted index over an in-memory corpus.
///
/// Postings are appended in document processing order. `doc_lengths` holds
/// the Euclidean norm of each document's `1 + ln(tf)` vector; an empty
/// document has length `0.0`.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: Postings,
    doc_freq: DocFreq,
    doc_lengths: DocLengths,
    num_docs: u32,
}

/// Build postings, document frequencies and document lengths in one pass.
pub fn build_index<I, K, V>(documents: I) -> Result<InvertedIndex>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<DocId>,
    V: AsRef<str>,
{
    let mut index = InvertedIndex::default();
    for (doc_id, text) in documents {
        index.add_document(doc_id.into(), text.as_ref())?;
    }
    tracing::debug!(num_docs = index.num_docs, num_terms = index.doc_freq.len(), "built inverted index");
    Ok(index)
}

impl InvertedIndex {
    fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        if self.doc_lengths.contains_key(&doc_id) {
            return Err(Error::DuplicateDocument(doc_id));
        }

        let counts = term_counts(text);
        let mut sum_sq = 0.0f64;
        for (term, tf) in counts {
            let w = log_tf(tf);
            sum_sq += w * w;
            *self.doc_freq.entry(term.clone()).or_insert(0) += 1;
            self.postings.entry(term).or_default().push(Posting { doc_id: doc_id.clone(), term_freq: tf });
        }

        self.doc_lengths.insert(doc_id, sum_sq.sqrt());
        self.num_docs += 1;
        Ok(())
    }

    pub fn postings(&self) -> &Postings { &self.postings }
    pub fn doc_freq(&self) -> &DocFreq { &self.doc_freq }
    pub fn doc_lengths(&self) -> &DocLengths { &self.doc_lengths }
    pub fn num_docs(&self) -> u32 { self.num_docs }
    pub fn num_terms(&self) -> usize { self.doc_freq.len() }

    pub fn postings_for(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn doc_length(&self, doc_id: &str) -> Option<f64> {
        self.doc_lengths.get(doc_id).copied()
    }

    /// Split the index into `(postings, doc_freq, doc_lengths)`.
    pub fn into_parts(self) -> (Postings, DocFreq, DocLengths) {
        (self.postings, self.doc_freq, self.doc_lengths)
    }

    /// Weighted, unit-normalized vector for `query` against this corpus.
    pub fn vectorize(&self, query: &str) -> QueryVector {
        vectorize(query, &self.doc_freq, self.num_docs)
    }

    /// Top [`MAX_RESULTS`] documents for `query` by cosine similarity.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredDoc>> {
        self.search_top_k(query, MAX_RESULTS)
    }

    pub fn search_top_k(&self, query: &str, k: usize) -> Result<Vec<ScoredDoc>> {
        let qv = self.vectorize(query);
        rank_top_k(&qv, &self.postings, &self.doc_lengths, k)
    }
}
