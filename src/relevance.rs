//! Vector-space relevance of schema tables to a query.
//!
//! Each call fits a fresh TF-IDF model on the query plus one context document
//! per table, so scores only compare tables scored together.

pub mod scorer;
pub mod vectorizer;

pub use scorer::{RelevanceScorer, RelevantTables, TableRelevance};
pub use vectorizer::{SparseVector, TfIdfVectorizer, cosine_similarity};
