//! Frequency-weighted edit-distance spelling corrector.
//!
//! Candidates are drawn from the closest edit-distance ring that contains any
//! known word: the word itself, then every known word one edit away, then two
//! edits away. Within a ring, more frequent words are preferred. Words more
//! than [`LENGTH_SLACK`] characters longer than the longest known word are not
//! searched at all and come back unchanged.

use std::collections::HashSet;

use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// How much longer than the longest known word a word may be and still be
/// searched for corrections.
pub const LENGTH_SLACK: usize = 3;

/// Spelling corrector over a [`SpellingDictionary`].
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: SpellingDictionary,
    max_distance: usize,
}

impl SpellingCorrector {
    /// Create a corrector over the built-in English dictionary.
    pub fn new() -> Self {
        Self::with_dictionary(BuiltinDictionary::english())
    }

    /// Create a corrector over a custom dictionary.
    pub fn with_dictionary(dictionary: SpellingDictionary) -> Self {
        SpellingCorrector {
            dictionary,
            max_distance: 2,
        }
    }

    /// Limit how many edits away candidates may be (1 or 2).
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance.clamp(1, 2);
        self
    }

    /// Register words with the underlying frequency model.
    pub fn load_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.load_words(words);
    }

    /// Check if a word is known.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// The dictionary backing this corrector.
    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    /// All plausible corrections for `word`, most frequent first (ties
    /// alphabetical). A known word, or one too long to be a misspelling of
    /// any known word, is its own only candidate. Empty when nothing known
    /// lies within `max_distance`.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();

        if self.is_known(&word) || !self.should_search(&word) {
            return vec![word];
        }

        let first_ring = edits1(&word);
        let mut found = self.known(first_ring.iter());

        if found.is_empty() && self.max_distance >= 2 {
            for edit in &first_ring {
                found.extend(
                    edits1(edit)
                        .into_iter()
                        .filter(|candidate| self.dictionary.contains(candidate)),
                );
            }
        }

        let mut candidates: Vec<String> = found.into_iter().collect();
        candidates.sort_by(|a, b| {
            self.dictionary
                .frequency(b)
                .cmp(&self.dictionary.frequency(a))
                .then_with(|| a.cmp(b))
        });
        candidates
    }

    /// The single most probable correction, if any.
    pub fn correction(&self, word: &str) -> Option<String> {
        self.candidates(word).into_iter().next()
    }

    fn should_search(&self, word: &str) -> bool {
        word.chars().count() <= self.dictionary.longest_word_length() + LENGTH_SLACK
    }

    fn known<'a, I>(&self, words: I) -> HashSet<String>
    where
        I: Iterator<Item = &'a String>,
    {
        words
            .filter(|word| self.dictionary.contains(word))
            .cloned()
            .collect()
    }
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self::new()
    }
}

/// Every string one deletion, transposition, replacement, or insertion away.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    let mut edits = HashSet::new();

    // Deletions
    for i in 0..len {
        let mut new_word = chars.clone();
        new_word.remove(i);
        edits.insert(new_word.into_iter().collect());
    }

    // Transpositions
    for i in 0..len.saturating_sub(1) {
        let mut new_word = chars.clone();
        new_word.swap(i, i + 1);
        edits.insert(new_word.into_iter().collect());
    }

    // Replacements
    for i in 0..len {
        for ch in ALPHABET.chars() {
            if ch != chars[i] {
                let mut new_word = chars.clone();
                new_word[i] = ch;
                edits.insert(new_word.into_iter().collect());
            }
        }
    }

    // Insertions
    for i in 0..=len {
        for ch in ALPHABET.chars() {
            let mut new_word = chars.clone();
            new_word.insert(i, ch);
            edits.insert(new_word.into_iter().collect());
        }
    }

    edits
}
