//! Business terminology: canonical terms and the words people use for them.
//!
//! Used to widen the text that is scored for relevance, so that a query about
//! a "purchase" can still reach a table full of "order" columns.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in term groups: a canonical term and its related words.
const DEFAULT_TERMS: &[(&str, &[&str])] = &[
    ("purchase", &["order", "transaction", "buy"]),
    ("customer", &["user", "client", "buyer", "account"]),
    ("product", &["item", "goods", "merchandise", "inventory"]),
    ("payment", &["transaction", "invoice", "billing"]),
    ("shipping", &["delivery", "shipment", "transport"]),
    ("category", &["type", "group", "classification"]),
    ("price", &["cost", "amount", "value"]),
    ("date", &["time", "when", "timestamp"]),
    ("status", &["state", "condition", "phase"]),
];

/// Canonical term to related words, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminologyMap {
    terms: IndexMap<String, Vec<String>>,
}

impl TerminologyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in commerce terminology.
    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (term, related) in DEFAULT_TERMS {
            map.insert(*term, related.iter().copied());
        }
        map
    }

    /// Add related words to a term.
    pub fn insert<S, I, W>(&mut self, term: S, related: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let entry = self.terms.entry(term.into().to_lowercase()).or_default();
        for word in related {
            let word = word.into().to_lowercase();
            if !entry.contains(&word) {
                entry.push(word);
            }
        }
    }

    /// Words linked to `word`, in either direction, excluding `word` itself.
    ///
    /// A canonical term yields its related words; a related word yields the
    /// canonical terms it belongs to.
    pub fn related_terms(&self, word: &str) -> BTreeSet<String> {
        let word = word.to_lowercase();
        let mut related = BTreeSet::new();

        if let Some(words) = self.terms.get(&word) {
            related.extend(words.iter().cloned());
        }
        for (term, words) in &self.terms {
            if words.contains(&word) {
                related.insert(term.clone());
            }
        }

        related.remove(&word);
        related
    }

    /// `text` followed by every related term of its words not already present.
    pub fn expand(&self, text: &str) -> String {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        let mut extra: BTreeSet<String> = BTreeSet::new();
        for word in &words {
            extra.extend(self.related_terms(word));
        }
        extra.retain(|term| !words.contains(term));

        if extra.is_empty() {
            return text.to_string();
        }

        let mut expanded = text.to_string();
        for term in extra {
            expanded.push(' ');
            expanded.push_str(&term);
        }
        expanded
    }

    /// Number of canonical terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the map has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
