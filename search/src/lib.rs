use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use vsm_core::{build_index, InvertedIndex, ScoredDoc, MAX_RESULTS};

pub mod corpus;

pub use corpus::read_documents;

/// Inputs for one batch run: a corpus directory and the queries to answer.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub corpus_dir: PathBuf,
    pub queries: Vec<String>,
    pub top_k: usize,
    pub extension: String,
}

impl SearchConfig {
    pub fn new<P: Into<PathBuf>>(corpus_dir: P, queries: Vec<String>) -> Self {
        Self { corpus_dir: corpus_dir.into(), queries, top_k: MAX_RESULTS, extension: "txt".into() }
    }

    /// Set the per-query result count, kept within `1..=MAX_RESULTS`.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.clamp(1, MAX_RESULTS);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<ScoredDoc>,
}

/// Load the corpus once, index it, and answer every configured query.
pub fn run(config: &SearchConfig) -> Result<Vec<QueryReport>> {
    let docs = read_documents(&config.corpus_dir, &config.extension)?;
    let index = build_index(&docs)?;
    tracing::info!(num_docs = index.num_docs(), num_terms = index.num_terms(), "index ready");

    config
        .queries
        .iter()
        .map(|q| answer(&index, q, config.top_k))
        .collect()
}

pub fn answer(index: &InvertedIndex, query: &str, top_k: usize) -> Result<QueryReport> {
    let start = std::time::Instant::now();
    let mut results = index.search_top_k(query, usize::MAX)?;
    let total_hits = results.len();
    results.truncate(top_k.min(MAX_RESULTS));
    let elapsed = start.elapsed();
    tracing::info!(query, total_hits, took_s = elapsed.as_secs_f64(), "query answered");
    Ok(QueryReport { query: query.to_string(), took_s: elapsed.as_secs_f64(), total_hits, results })
}

/// Plain-text listing: the query, a header, then `doc_id: score` lines.
pub fn render_text(report: &QueryReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.query);
    let _ = writeln!(out, "Ranked Document IDs:");
    for hit in &report.results {
        let _ = writeln!(out, "{}: {}", hit.doc_id, hit.score);
    }
    out
}

pub fn render_json(report: &QueryReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
