//! Whole-query rewrites built from per-word suggestions.
//!
//! Each whitespace-separated word made only of letters is sent to a
//! suggestion function. From the answers the generator builds:
//!
//! - `best_match`: every corrected word takes its top suggestion
//! - `alternative_i`: every word with an `i`-th ranked suggestion takes it;
//!   words with fewer suggestions keep their original spelling (not the top
//!   pick)
//!
//! A variation's confidence is the product of the confidences of the
//! suggestions it substitutes, so it shrinks as more words change. When no
//! word gets any suggestion the query comes back verbatim as the single
//! `original` variation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchemaLensError;
use crate::spelling::Suggestion;

/// Which rewrite strategy produced a variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariationLabel {
    /// The query exactly as given.
    Original,
    /// Every correctable word replaced by its top suggestion.
    BestMatch,
    /// Words replaced by their suggestion at this rank (1-based after the top).
    Alternative(usize),
}

impl fmt::Display for VariationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariationLabel::Original => f.write_str("original"),
            VariationLabel::BestMatch => f.write_str("best_match"),
            VariationLabel::Alternative(rank) => write!(f, "alternative_{rank}"),
        }
    }
}

impl FromStr for VariationLabel {
    type Err = SchemaLensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(VariationLabel::Original),
            "best_match" => Ok(VariationLabel::BestMatch),
            _ => s
                .strip_prefix("alternative_")
                .and_then(|rank| rank.parse().ok())
                .map(VariationLabel::Alternative)
                .ok_or_else(|| SchemaLensError::other(format!("Unknown variation label: {s}"))),
        }
    }
}

impl Serialize for VariationLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VariationLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// One candidate rewrite of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryVariation {
    /// The rewritten query.
    pub query: String,
    /// Product of the substituted suggestions' confidences.
    pub confidence: f64,
    /// How this rewrite was built.
    pub label: VariationLabel,
}

impl QueryVariation {
    /// Create a new variation.
    pub fn new<S: Into<String>>(query: S, confidence: f64, label: VariationLabel) -> Self {
        QueryVariation {
            query: query.into(),
            confidence,
            label,
        }
    }
}

/// A query word with the suggestions it received (empty for words that were
/// not eligible or got nothing).
struct WordSlot<'q> {
    original: &'q str,
    suggestions: Vec<Suggestion>,
}

impl WordSlot<'_> {
    /// Text and confidence contribution at `rank`; the original word and a
    /// neutral 1.0 when there is no suggestion at that rank.
    fn at_rank(&self, rank: usize) -> (&str, f64) {
        match self.suggestions.get(rank) {
            Some(suggestion) => (suggestion.word.as_str(), suggestion.confidence),
            None => (self.original, 1.0),
        }
    }
}

/// Builds ranked [`QueryVariation`]s.
#[derive(Debug, Clone)]
pub struct QueryVariationGenerator {
    alternatives: usize,
}

impl QueryVariationGenerator {
    /// Create a generator producing `best_match` plus `alternatives`
    /// alternative rewrites.
    pub fn new(alternatives: usize) -> Self {
        QueryVariationGenerator { alternatives }
    }

    /// Whether a word takes part in correction: non-empty and letters only.
    pub fn is_correctable(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphabetic)
    }

    /// Generate variations of `query`, highest confidence first. Never empty.
    pub fn generate<F>(&self, query: &str, mut suggest: F) -> Vec<QueryVariation>
    where
        F: FnMut(&str) -> Vec<Suggestion>,
    {
        let slots: Vec<WordSlot<'_>> = query
            .split_whitespace()
            .map(|word| WordSlot {
                original: word,
                suggestions: if Self::is_correctable(word) {
                    suggest(word)
                } else {
                    Vec::new()
                },
            })
            .collect();

        if slots.iter().all(|slot| slot.suggestions.is_empty()) {
            return vec![QueryVariation::new(query, 1.0, VariationLabel::Original)];
        }

        let mut variations = Vec::with_capacity(self.alternatives + 1);
        variations.push(Self::rewrite(&slots, 0, VariationLabel::BestMatch));
        for rank in 1..=self.alternatives {
            variations.push(Self::rewrite(
                &slots,
                rank,
                VariationLabel::Alternative(rank),
            ));
        }

        // stable: construction order settles ties, so best_match wins them
        variations.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        variations
    }

    fn rewrite(slots: &[WordSlot<'_>], rank: usize, label: VariationLabel) -> QueryVariation {
        let mut confidence = 1.0;
        let words: Vec<&str> = slots
            .iter()
            .map(|slot| {
                let (text, contribution) = slot.at_rank(rank);
                confidence *= contribution;
                text
            })
            .collect();

        QueryVariation::new(words.join(" "), confidence, label)
    }
}

impl Default for QueryVariationGenerator {
    fn default() -> Self {
        Self::new(2)
    }
}
