//! Word-frequency dictionary backing the spelling corrector.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::debug;

/// English word frequencies, one `word count` pair per line, most frequent
/// first.
const ENGLISH_FREQUENCY_LIST: &str = include_str!("../../assets/frequency_dictionary_en.txt");

static ENGLISH: LazyLock<SpellingDictionary> = LazyLock::new(|| {
    let dictionary = SpellingDictionary::from_frequency_list(ENGLISH_FREQUENCY_LIST);
    debug!(
        "Loaded English frequency dictionary: {} words, longest {}",
        dictionary.word_count(),
        dictionary.longest_word_length()
    );
    dictionary
});

/// A dictionary that stores words and their frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: HashMap<String, u32>,
    longest_word_length: usize,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a frequency list with one `word count` pair per line.
    ///
    /// Blank lines and lines whose count is not a number are skipped.
    pub fn from_frequency_list(text: &str) -> Self {
        let mut dictionary = SpellingDictionary::new();
        for line in text.lines() {
            let Some((word, count)) = line.trim().split_once(char::is_whitespace) else {
                continue;
            };
            if let Ok(frequency) = count.trim().parse::<u32>() {
                dictionary.add_word(word, frequency);
            }
        }
        dictionary
    }

    /// Set the frequency of a word, replacing any previous value.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        let normalized = word.to_lowercase();
        self.longest_word_length = self.longest_word_length.max(normalized.chars().count());
        self.words.insert(normalized, frequency);
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        let current = self.frequency(word);
        self.add_word(word, current.saturating_add(1));
    }

    /// Register every word of an iterator, bumping each frequency by one.
    pub fn load_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.increment_word(word.as_ref());
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Length in characters of the longest known word.
    pub fn longest_word_length(&self) -> usize {
        self.longest_word_length
    }
}

/// Built-in word lists.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// General English word frequencies, with the business and data
    /// vocabulary people use when asking about tables.
    pub fn english() -> SpellingDictionary {
        ENGLISH.clone()
    }

    /// A small dictionary for tests.
    #[cfg(test)]
    pub(crate) fn minimal() -> SpellingDictionary {
        let mut dict = SpellingDictionary::new();
        for word in ["order", "orders", "customer", "product", "price", "user"] {
            dict.add_word(word, 100);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();

        assert!(!dict.contains("order"));
        assert_eq!(dict.frequency("order"), 0);
        assert_eq!(dict.word_count(), 0);
        assert_eq!(dict.longest_word_length(), 0);

        dict.add_word("order", 5);
        assert!(dict.contains("order"));
        assert_eq!(dict.frequency("order"), 5);

        dict.increment_word("ORDER");
        assert_eq!(dict.frequency("order"), 6);

        dict.add_word("order", 2);
        assert_eq!(dict.frequency("order"), 2);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_load_words_increments() {
        let mut dict = SpellingDictionary::new();
        dict.load_words(["user", "email", "user"]);
        assert_eq!(dict.frequency("user"), 2);
        assert_eq!(dict.frequency("email"), 1);
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_longest_word_tracks_additions() {
        let mut dict = SpellingDictionary::new();
        dict.load_words(["id", "shipment"]);
        assert_eq!(dict.longest_word_length(), 8);
        dict.load_words(["transaction_identifier"]);
        assert_eq!(dict.longest_word_length(), 22);
    }

    #[test]
    fn test_from_frequency_list() {
        let dict = SpellingDictionary::from_frequency_list("the 100\nOrder 7\n\nbroken line\nprice x\n");
        assert_eq!(dict.word_count(), 2);
        assert_eq!(dict.frequency("the"), 100);
        assert_eq!(dict.frequency("order"), 7);
        assert!(!dict.contains("broken"));
        assert!(!dict.contains("price"));
    }

    #[test]
    fn test_english_dictionary_covers_general_words() {
        let english = BuiltinDictionary::english();
        assert!(english.word_count() > 20_000);
        for word in ["the", "big", "ratings", "customer", "invoice", "salary"] {
            assert!(english.contains(word), "{word} should be known");
        }
        assert!(english.frequency("the") > english.frequency("customer"));
        assert!(!english.contains("custmer"));
        assert!((15..=30).contains(&english.longest_word_length()));
    }

    #[test]
    fn test_minimal_dictionary() {
        let minimal = BuiltinDictionary::minimal();
        assert!(minimal.contains("orders"));
        assert_eq!(minimal.word_count(), 6);
    }
}
