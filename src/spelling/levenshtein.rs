//! Levenshtein distance and close-match search.

use std::cmp::{Ordering, min};

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into the other.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len2 = s2_chars.len();

    if s1_chars.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1_chars.len();
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, &c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Normalized similarity between 0.0 (nothing in common) and 1.0 (identical):
/// `1 - distance / max(len1, len2)`.
pub fn levenshtein_ratio(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    1.0 - (levenshtein_distance(s1, s2) as f64 / max_len as f64)
}

/// Return up to `n` candidates whose similarity ratio to `word` is at least
/// `cutoff`, best first. Among equal ratios the word that sorts last comes
/// first, so when the cap of `n` splits a tie the later words are the ones
/// kept. The result does not depend on the iteration order of `candidates`.
pub fn close_matches<'a, I>(word: &str, candidates: I, n: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &String)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let ratio = levenshtein_ratio(word, candidate);
            (ratio >= cutoff).then_some((ratio, candidate))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.1.cmp(a.1))
    });
    scored.truncate(n);

    scored.into_iter().map(|(_, word)| word.clone()).collect()
}
