//! TF-IDF vectorizer over word n-grams.
//!
//! Terms are the analyzer's tokens plus every run of up to `max_n` adjacent
//! tokens joined by a space. Weights are raw term counts times the smoothed
//! inverse document frequency `ln((1 + n) / (1 + df)) + 1`, and every row is
//! scaled to unit length.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{Result, SchemaLensError};

/// A sparse vector: term index to weight, in index order.
pub type SparseVector = BTreeMap<usize, f64>;

/// TF-IDF vectorizer.
pub struct TfIdfVectorizer {
    /// Term -> column index, assigned in alphabetical term order.
    vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
    /// Smallest and largest n-gram length.
    ngram_range: (usize, usize),
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Unigrams and bigrams over the [`StandardAnalyzer`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?), (1, 2)))
    }

    /// Create a vectorizer with a custom analyzer and n-gram range.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>, ngram_range: (usize, usize)) -> Self {
        TfIdfVectorizer {
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
            ngram_range,
            analyzer,
        }
    }

    /// Learn vocabulary and idf from `documents`, replacing any earlier fit.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SchemaLensError::invalid_argument(format!(
                "invalid n-gram range ({min_n}, {max_n})"
            )));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique_terms: BTreeSet<String> = self.terms(doc)?.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n_documents = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a document into a unit-length TF-IDF vector. Terms outside
    /// the fitted vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut vector = SparseVector::new();
        for term in self.terms(document)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *vector.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        for (idx, weight) in vector.iter_mut() {
            *weight *= self.idf[*idx];
        }

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }

        Ok(vector)
    }

    /// Fit on `documents` and return their vectors, in order.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Number of distinct terms seen during fitting.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a term, if fitted.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Analyzer tokens expanded into n-grams.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut terms = Vec::new();
        for n in min_n.max(1)..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        Ok(terms)
    }
}

/// Cosine similarity of two sparse vectors; 0.0 when either is all zeros.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let dot_product: f64 = a
        .iter()
        .filter_map(|(idx, x)| b.get(idx).map(|y| x * y))
        .sum();
    let magnitude_a = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}
