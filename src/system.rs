//! The query pipeline: correct a query against a schema, then select the
//! tables relevant to the corrected query.
//!
//! ```
//! use schemalens::schema::{ColumnSchema, Schema, TableSchema};
//! use schemalens::system::SchemaSystem;
//!
//! let schema = Schema::new().with_table(
//!     "users",
//!     TableSchema::new(vec![ColumnSchema::new("email", "string")]),
//! );
//!
//! let system = SchemaSystem::new().unwrap();
//! let variations = system.suggest_query_corrections("emal", &schema);
//! assert!(variations.iter().any(|v| v.query == "email"));
//!
//! let result = system.process("Email", &schema).unwrap();
//! assert_eq!(result.corrected_query, "email");
//! assert!(result.relevant_tables.contains_key("users"));
//! ```
//!
//! `process` keeps the top-ranked variation. An alternative rewrite that
//! finds nothing to substitute reproduces the query with confidence 1.0, so
//! an uncertain correction does not replace the words the user typed.

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SystemConfig;
use crate::error::Result;
use crate::relevance::{RelevanceScorer, RelevantTables};
use crate::schema::Schema;
use crate::spelling::{SpellingCorrector, Suggestion, SuggestionEngine};
use crate::terminology::TerminologyMap;
use crate::variation::{QueryVariation, QueryVariationGenerator};
use crate::vocabulary::{Vocabulary, VocabularyBuilder};

/// Result of [`SchemaSystem::process`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The highest-confidence rewrite of the query.
    pub corrected_query: String,
    /// Tables relevant to the corrected query, with their scores.
    pub relevant_tables: RelevantTables,
}

/// Vocabulary and corrector built for one schema identity.
#[derive(Clone)]
struct VocabularyState {
    schema_id: Uuid,
    vocabulary: Arc<Vocabulary>,
    corrector: Arc<SpellingCorrector>,
}

/// Spelling-tolerant table selection over relational schemas.
///
/// The vocabulary of the last schema seen is cached and reused for as long as
/// the same schema value is passed in. Changes made to that schema in place
/// are not noticed until [`reset`](Self::reset) is called.
pub struct SchemaSystem {
    config: SystemConfig,
    scorer: RelevanceScorer,
    generator: QueryVariationGenerator,
    terminology: TerminologyMap,
    cache: RwLock<Option<VocabularyState>>,
}

impl std::fmt::Debug for SchemaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaSystem")
            .field("config", &self.config)
            .field("scorer", &self.scorer)
            .field("cached_schema", &self.cache.read().as_ref().map(|s| s.schema_id))
            .finish()
    }
}

impl SchemaSystem {
    /// Create a system with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(SystemConfig::default())
    }

    /// Create a system with a custom configuration.
    pub fn with_config(config: SystemConfig) -> Result<Self> {
        config.validate()?;

        Ok(SchemaSystem {
            generator: QueryVariationGenerator::new(config.alternatives),
            scorer: RelevanceScorer::new()?,
            terminology: TerminologyMap::builtin(),
            cache: RwLock::new(None),
            config,
        })
    }

    /// Replace the terminology used when `expand_terminology` is on.
    pub fn with_terminology(mut self, terminology: TerminologyMap) -> Self {
        self.terminology = terminology;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Drop the cached vocabulary so the next call rebuilds it.
    pub fn reset(&self) {
        *self.cache.write() = None;
    }

    /// The vocabulary of `schema`, built on first use.
    pub fn vocabulary(&self, schema: &Schema) -> Arc<Vocabulary> {
        self.state(schema).vocabulary
    }

    /// Ranked correction candidates for one word.
    pub fn suggest(&self, word: &str, schema: &Schema) -> Vec<Suggestion> {
        let state = self.state(schema);
        SuggestionEngine::new(&state.vocabulary, &state.corrector, &self.config.suggestion)
            .suggest(word)
    }

    /// Ranked rewrites of a whole query, highest confidence first.
    pub fn suggest_query_corrections(&self, query: &str, schema: &Schema) -> Vec<QueryVariation> {
        let state = self.state(schema);
        let engine =
            SuggestionEngine::new(&state.vocabulary, &state.corrector, &self.config.suggestion);
        self.generator.generate(query, |word| engine.suggest(word))
    }

    /// Tables relevant to `query` as written, without correction.
    pub fn select_relevant_tables(
        &self,
        query: &str,
        schema: &Schema,
        threshold: f64,
    ) -> Result<RelevantTables> {
        self.scorer.score(query, schema, threshold)
    }

    /// Correct `query`, then select the tables relevant to the correction
    /// using the configured threshold.
    pub fn process(&self, query: &str, schema: &Schema) -> Result<ProcessResult> {
        self.process_with_threshold(query, schema, self.config.relevance_threshold)
    }

    /// [`process`](Self::process) with an explicit threshold.
    pub fn process_with_threshold(
        &self,
        query: &str,
        schema: &Schema,
        threshold: f64,
    ) -> Result<ProcessResult> {
        let corrected_query = self
            .suggest_query_corrections(query, schema)
            .into_iter()
            .next()
            .map(|variation| variation.query)
            .unwrap_or_else(|| query.to_string());

        let relevant_tables = if self.config.expand_terminology {
            let expanded = self.terminology.expand(&corrected_query);
            debug!("scoring expanded query {expanded:?}");
            self.select_relevant_tables(&expanded, schema, threshold)?
        } else {
            self.select_relevant_tables(&corrected_query, schema, threshold)?
        };

        Ok(ProcessResult {
            corrected_query,
            relevant_tables,
        })
    }

    fn state(&self, schema: &Schema) -> VocabularyState {
        if let Some(state) = self.cache.read().as_ref() {
            if state.schema_id == schema.id() {
                debug!("vocabulary cache hit for schema {}", state.schema_id);
                return state.clone();
            }
        }

        let vocabulary = VocabularyBuilder::build(schema);
        let mut corrector = SpellingCorrector::new()
            .with_max_distance(self.config.suggestion.spelling_max_distance);
        vocabulary.register_with(&mut corrector);

        let state = VocabularyState {
            schema_id: schema.id(),
            vocabulary: Arc::new(vocabulary),
            corrector: Arc::new(corrector),
        };
        *self.cache.write() = Some(state.clone());
        state
    }
}
