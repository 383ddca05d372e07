//! Schema-derived vocabulary.
//!
//! Two word sets feed spelling correction:
//!
//! - `schema_vocabulary`: letter runs from table and column names
//! - `context_words`: letter runs from column descriptions, plus words implied
//!   by common column-name shapes (identifiers, dates, amounts)
//!
//! Tokens are maximal runs of `a-z` in the lowercased text; digits,
//! underscores and everything else only separate words.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::schema::Schema;
use crate::spelling::SpellingCorrector;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("word pattern should be valid"));

/// Column-name substrings and the context words they imply. Every matching
/// rule applies.
const COLUMN_HINTS: &[(&str, &[&str])] = &[
    ("id", &["unique", "identifier", "reference"]),
    ("date", &["date", "time", "timestamp"]),
    ("amount", &["total", "sum", "price", "cost"]),
];

/// The two word sets derived from one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Words from table and column names.
    pub schema_vocabulary: BTreeSet<String>,
    /// Words from descriptions and column-name hints.
    pub context_words: BTreeSet<String>,
}

impl Vocabulary {
    /// Check whether a (lowercase) word is a schema term.
    pub fn is_schema_term(&self, word: &str) -> bool {
        self.schema_vocabulary.contains(word)
    }

    /// Check whether both sets are empty.
    pub fn is_empty(&self) -> bool {
        self.schema_vocabulary.is_empty() && self.context_words.is_empty()
    }

    /// Make both word sets known to a spelling corrector.
    pub fn register_with(&self, corrector: &mut SpellingCorrector) {
        corrector.load_words(&self.schema_vocabulary);
        corrector.load_words(&self.context_words);
    }
}

/// Builds a [`Vocabulary`] from a [`Schema`].
pub struct VocabularyBuilder;

impl VocabularyBuilder {
    /// Derive the vocabulary of a schema. An empty schema yields empty sets.
    pub fn build(schema: &Schema) -> Vocabulary {
        let mut vocabulary = Vocabulary::default();

        for (table_name, table) in schema.tables() {
            extend_words(&mut vocabulary.schema_vocabulary, table_name);

            for column in &table.columns {
                let column_name = column.name.to_lowercase();
                extend_words(&mut vocabulary.schema_vocabulary, &column_name);

                if let Some(description) = &column.description {
                    extend_words(&mut vocabulary.context_words, description);
                }

                for (needle, words) in COLUMN_HINTS {
                    if column_name.contains(needle) {
                        vocabulary
                            .context_words
                            .extend(words.iter().map(|w| w.to_string()));
                    }
                }
            }
        }

        debug!(
            "built vocabulary: {} schema terms, {} context words from {} tables",
            vocabulary.schema_vocabulary.len(),
            vocabulary.context_words.len(),
            schema.len()
        );

        vocabulary
    }
}

/// Lowercase `text` and add every letter run to `set`.
fn extend_words(set: &mut BTreeSet<String>, text: &str) {
    let lowered = text.to_lowercase();
    set.extend(
        WORD_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string()),
    );
}
