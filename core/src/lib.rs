pub mod error;
pub mod index;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub use error::{Error, Result};
pub use index::{build_index, Corpus, DocFreq, DocId, DocLengths, InvertedIndex, Posting, Postings, Term};
pub use query::{term_weights, vectorize, QueryVector};
pub use rank::{rank, rank_top_k, ScoredDoc, MAX_RESULTS};
