//! Table scoring against a query.

use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{Result, SchemaLensError};
use crate::relevance::vectorizer::{TfIdfVectorizer, cosine_similarity};
use crate::schema::{Schema, TableSchema};

/// A table that cleared the relevance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRelevance {
    /// The table as it appears in the schema.
    #[serde(flatten)]
    pub table: TableSchema,
    /// Cosine similarity to the query, in [0, 1].
    pub relevance_score: f64,
}

/// Relevant tables keyed by name, in schema order.
pub type RelevantTables = IndexMap<String, TableRelevance>;

/// Scores schema tables by TF-IDF cosine similarity.
#[derive(Clone)]
pub struct RelevanceScorer {
    analyzer: Arc<dyn Analyzer>,
    ngram_range: (usize, usize),
}

impl std::fmt::Debug for RelevanceScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceScorer")
            .field("analyzer", &self.analyzer.name())
            .field("ngram_range", &self.ngram_range)
            .finish()
    }
}

impl RelevanceScorer {
    /// Unigram and bigram scoring over the standard English analyzer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?), (1, 2)))
    }

    /// Create a scorer with a custom analyzer and n-gram range.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>, ngram_range: (usize, usize)) -> Self {
        RelevanceScorer {
            analyzer,
            ngram_range,
        }
    }

    /// Tables of `schema` whose similarity to `query` is at least
    /// `threshold`, each with its score.
    pub fn score(&self, query: &str, schema: &Schema, threshold: f64) -> Result<RelevantTables> {
        if !threshold.is_finite() {
            return Err(SchemaLensError::invalid_argument(format!(
                "relevance threshold must be finite, got {threshold}"
            )));
        }

        let mut relevant = RelevantTables::new();
        if schema.is_empty() {
            return Ok(relevant);
        }

        let mut corpus = Vec::with_capacity(schema.len() + 1);
        corpus.push(query.to_lowercase());
        corpus.extend(schema.tables().map(|(name, table)| table.context_text(name)));

        // fitted per call, never reused
        let mut vectorizer = TfIdfVectorizer::with_analyzer(self.analyzer.clone(), self.ngram_range);
        let rows = vectorizer.fit_transform(&corpus)?;
        if vectorizer.vocabulary_size() == 0 {
            debug!("no scorable terms in query or schema");
            return Ok(relevant);
        }

        let (query_row, table_rows) = rows.split_first().ok_or_else(|| {
            SchemaLensError::analysis("vectorizer returned no rows for a non-empty corpus")
        })?;

        for ((name, table), row) in schema.tables().zip(table_rows) {
            let similarity = cosine_similarity(query_row, row).clamp(0.0, 1.0);
            trace!("table {name:?} scored {similarity:.4}");

            if similarity >= threshold {
                relevant.insert(
                    name.clone(),
                    TableRelevance {
                        table: table.clone(),
                        relevance_score: similarity,
                    },
                );
            }
        }

        debug!(
            "{} of {} tables at or above threshold {threshold}",
            relevant.len(),
            schema.len()
        );

        Ok(relevant)
    }
}
