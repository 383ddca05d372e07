//! Ranked correction candidates for a single word.
//!
//! An exact schema term wins outright; otherwise three sources contribute,
//! each with a fixed confidence:
//!
//! | source     | how                                        | confidence |
//! |------------|--------------------------------------------|------------|
//! | `exact`    | word is a schema term (short-circuits)     | 1.0        |
//! | `schema`   | close match against schema terms           | 0.9        |
//! | `context`  | close match against context words          | 0.8        |
//! | `spelling` | frequency-based corrector, not yet present | 0.7        |
//!
//! The pool is sorted by descending confidence, then alphabetically, and cut
//! to the top three.

use std::cmp::Ordering;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaLensError};
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::levenshtein::close_matches;
use crate::vocabulary::Vocabulary;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// The word already is a schema term.
    Exact,
    /// Close match against schema terms.
    Schema,
    /// Close match against description and hint words.
    Context,
    /// Statistical spelling correction.
    Spelling,
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SuggestionSource::Exact => "exact",
            SuggestionSource::Schema => "schema",
            SuggestionSource::Context => "context",
            SuggestionSource::Spelling => "spelling",
        };
        f.write_str(name)
    }
}

/// A candidate correction for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Which source produced it.
    pub source: SuggestionSource,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(word: S, confidence: f64, source: SuggestionSource) -> Self {
        Suggestion {
            word: word.into(),
            confidence,
            source,
        }
    }

    /// Ranking order: higher confidence first, then alphabetical.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .confidence
            .partial_cmp(&self.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Minimum similarity ratio for a close match.
    pub fuzzy_cutoff: f64,
    /// Close matches taken from each vocabulary.
    pub max_close_matches: usize,
    /// Suggestions returned per word.
    pub max_suggestions: usize,
    /// Confidence of schema-term close matches.
    pub schema_confidence: f64,
    /// Confidence of context-word close matches.
    pub context_confidence: f64,
    /// Confidence of spelling-corrector candidates.
    pub spelling_confidence: f64,
    /// Edit distance searched by the spelling corrector (1 or 2).
    pub spelling_max_distance: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            fuzzy_cutoff: 0.6,
            max_close_matches: 3,
            max_suggestions: 3,
            schema_confidence: 0.9,
            context_confidence: 0.8,
            spelling_confidence: 0.7,
            spelling_max_distance: 2,
        }
    }
}

impl SuggestionConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let unit_values = [
            ("fuzzy_cutoff", self.fuzzy_cutoff),
            ("schema_confidence", self.schema_confidence),
            ("context_confidence", self.context_confidence),
            ("spelling_confidence", self.spelling_confidence),
        ];
        for (name, value) in unit_values {
            if !(0.0..=1.0).contains(&value) {
                return Err(SchemaLensError::invalid_config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.max_suggestions == 0 {
            return Err(SchemaLensError::invalid_config(
                "max_suggestions must be at least 1",
            ));
        }
        if !(1..=2).contains(&self.spelling_max_distance) {
            return Err(SchemaLensError::invalid_config(
                "spelling_max_distance must be 1 or 2",
            ));
        }
        Ok(())
    }
}

/// Produces ranked suggestions for a word against one schema's vocabulary.
pub struct SuggestionEngine<'a> {
    vocabulary: &'a Vocabulary,
    corrector: &'a SpellingCorrector,
    config: &'a SuggestionConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create an engine over a vocabulary and a corrector that already knows
    /// that vocabulary.
    pub fn new(
        vocabulary: &'a Vocabulary,
        corrector: &'a SpellingCorrector,
        config: &'a SuggestionConfig,
    ) -> Self {
        SuggestionEngine {
            vocabulary,
            corrector,
            config,
        }
    }

    /// Ranked suggestions for `word`; empty when no source has anything.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let word_lower = word.to_lowercase();

        if self.vocabulary.is_schema_term(&word_lower) {
            return vec![Suggestion::new(word_lower, 1.0, SuggestionSource::Exact)];
        }

        let mut suggestions: Vec<Suggestion> = Vec::new();

        let sources = [
            (
                &self.vocabulary.schema_vocabulary,
                self.config.schema_confidence,
                SuggestionSource::Schema,
            ),
            (
                &self.vocabulary.context_words,
                self.config.context_confidence,
                SuggestionSource::Context,
            ),
        ];
        for (words, confidence, source) in sources {
            let matches = close_matches(
                &word_lower,
                words,
                self.config.max_close_matches,
                self.config.fuzzy_cutoff,
            );
            suggestions.extend(
                matches
                    .into_iter()
                    .map(|candidate| Suggestion::new(candidate, confidence, source)),
            );
        }

        for candidate in self.corrector.candidates(&word_lower) {
            if !suggestions.iter().any(|s| s.word == candidate) {
                suggestions.push(Suggestion::new(
                    candidate,
                    self.config.spelling_confidence,
                    SuggestionSource::Spelling,
                ));
            }
        }

        suggestions.sort_by(Suggestion::rank_cmp);
        suggestions.truncate(self.config.max_suggestions);

        trace!("suggestions for {word_lower:?}: {suggestions:?}");
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnSchema, Schema, TableSchema};
    use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};
    use crate::vocabulary::VocabularyBuilder;

    fn sample() -> (Vocabulary, SpellingCorrector) {
        let schema = Schema::new()
            .with_table(
                "orders",
                TableSchema::new(vec![
                    ColumnSchema::new("order_id", "integer")
                        .with_description("Unique order identifier"),
                    ColumnSchema::new("order_date", "date")
                        .with_description("Date when order was placed"),
                    ColumnSchema::new("total_amount", "decimal"),
                ]),
            )
            .with_table(
                "users",
                TableSchema::new(vec![
                    ColumnSchema::new("user_id", "integer"),
                    ColumnSchema::new("username", "string"),
                    ColumnSchema::new("email", "string")
                        .with_description("User's email address"),
                ]),
            );
        let vocabulary = VocabularyBuilder::build(&schema);
        let mut corrector = SpellingCorrector::new();
        vocabulary.register_with(&mut corrector);
        (vocabulary, corrector)
    }

    fn is_ranked(suggestions: &[Suggestion]) -> bool {
        suggestions
            .windows(2)
            .all(|w| w[0].rank_cmp(&w[1]) != Ordering::Greater)
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        assert_eq!(
            engine.suggest("Orders"),
            vec![Suggestion::new("orders", 1.0, SuggestionSource::Exact)]
        );
    }

    #[test]
    fn test_sources_and_ordering() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        // "ordr": schema close matches are "order" (0.8) and "orders" (0.67)
        let suggestions = engine.suggest("ordr");
        assert_eq!(suggestions[0], Suggestion::new("order", 0.9, SuggestionSource::Schema));
        assert_eq!(suggestions[1], Suggestion::new("orders", 0.9, SuggestionSource::Schema));
        assert!(suggestions.len() <= 3);
        assert!(is_ranked(&suggestions));
    }

    #[test]
    fn test_context_source() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        let suggestions = engine.suggest("adress");
        assert_eq!(
            suggestions[0],
            Suggestion::new("address", 0.8, SuggestionSource::Context)
        );
    }

    #[test]
    fn test_spelling_source_fills_gaps() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        let suggestions = engine.suggest("custmer");
        assert_eq!(
            suggestions,
            vec![Suggestion::new("customer", 0.7, SuggestionSource::Spelling)]
        );
    }

    #[test]
    fn test_spelling_does_not_duplicate_fuzzy_hits() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        // "email" is both a schema term and a context word; the corrector
        // proposes it too, but it is not repeated as a spelling suggestion
        let suggestions = engine.suggest("emal");
        assert_eq!(
            suggestions[0],
            Suggestion::new("email", 0.9, SuggestionSource::Schema)
        );
        assert_eq!(
            suggestions[1],
            Suggestion::new("email", 0.8, SuggestionSource::Context)
        );
        assert!(
            !suggestions
                .iter()
                .any(|s| s.source == SuggestionSource::Spelling && s.word == "email")
        );
        assert!(is_ranked(&suggestions));
    }

    #[test]
    fn test_known_word_is_its_own_spelling_suggestion() {
        let (vocabulary, corrector) = sample();
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        assert_eq!(
            engine.suggest("big"),
            vec![Suggestion::new("big", 0.7, SuggestionSource::Spelling)]
        );
        assert_eq!(
            engine.suggest("ratings"),
            vec![Suggestion::new("ratings", 0.7, SuggestionSource::Spelling)]
        );
    }

    #[test]
    fn test_nothing_found() {
        let vocabulary = Vocabulary::default();
        let corrector = SpellingCorrector::with_dictionary(SpellingDictionary::new());
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);
        assert!(engine.suggest("qwxz").is_empty());
    }

    #[test]
    fn test_truncated_to_max_suggestions() {
        let vocabulary = Vocabulary {
            schema_vocabulary: ["bat", "cat", "hat", "mat"].iter().map(|s| s.to_string()).collect(),
            context_words: ["rat"].iter().map(|s| s.to_string()).collect(),
        };
        let corrector = SpellingCorrector::with_dictionary(BuiltinDictionary::minimal());
        let config = SuggestionConfig::default();
        let engine = SuggestionEngine::new(&vocabulary, &corrector, &config);

        let suggestions = engine.suggest("xat");
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        // the tie among the four schema terms keeps the later three
        assert_eq!(words, vec!["cat", "hat", "mat"]);
        assert!(suggestions.iter().all(|s| s.confidence == 0.9));
    }

    #[test]
    fn test_config_validation() {
        assert!(SuggestionConfig::default().validate().is_ok());

        let config = SuggestionConfig {
            fuzzy_cutoff: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SuggestionConfig {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
