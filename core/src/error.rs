use crate::DocId;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or querying an index.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The same document identifier was supplied twice to the indexer.
    #[error("duplicate document id: {0}")]
    DuplicateDocument(DocId),
    /// A posting references a document that has no length entry.
    #[error("index corruption: no length recorded for document {doc_id}")]
    IndexCorruption { doc_id: DocId },
}
