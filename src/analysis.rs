//! Text analysis for relevance scoring.
//!
//! A tokenizer breaks text into tokens, filters transform the resulting
//! stream, and an analyzer chains the two. The TF-IDF vectorizer in
//! [`crate::relevance`] consumes analyzer output.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
