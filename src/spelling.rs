//! Spelling correction primitives and the multi-source suggestion engine.
//!
//! The pieces, leaf-first: a word-frequency [`dictionary`], edit distance and
//! close-match search in [`levenshtein`], the frequency-based
//! [`corrector`], and the ranked [`suggest`] engine that combines schema,
//! context, and spelling sources.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

pub use corrector::SpellingCorrector;
pub use dictionary::{BuiltinDictionary, SpellingDictionary};
pub use suggest::{Suggestion, SuggestionEngine, SuggestionSource};
