//! Core data types shared across the summarization pipeline.

use serde::{Deserialize, Serialize};

/// A candidate sentence produced by the normalizer.
///
/// Sentences are trimmed substrings of the whitespace-collapsed input text.
/// `index` is the sentence's position in the normalizer's output sequence and
/// is the tie-break key for equal scores downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminal punctuation attached.
    pub text: String,
    /// Position in the normalizer's output sequence.
    pub index: usize,
    /// Number of whitespace-delimited words.
    pub word_count: usize,
}

impl Sentence {
    /// Create a sentence, computing its word count from the text.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let word_count = crate::nlp::tokenizer::word_count(&text);
        Self {
            text,
            index,
            word_count,
        }
    }
}

/// A sentence paired with its term-frequency score.
///
/// Only sentences with score > 0 survive the scoring stage; zero-scored
/// sentences are non-candidates, not low-ranked candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: u64,
}

/// The pipeline output: up to K sentences ordered by descending score,
/// ties broken by original sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// An empty summary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The selected sentence texts, in rank order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.sentence.text.as_str())
    }

    /// Collect the selected sentence texts into owned strings.
    pub fn into_texts(self) -> Vec<String> {
        self.sentences.into_iter().map(|s| s.sentence.text).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Stopword language (e.g., "en").
    pub language: String,
    /// Maximum number of sentences in the summary (K).
    pub num_sentences: usize,
    /// Minimum word count for a candidate sentence (inclusive).
    pub min_sentence_words: usize,
    /// Lowercase prefixes that mark a sentence as boilerplate noise.
    pub noise_prefixes: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            num_sentences: 6,
            min_sentence_words: 9,
            noise_prefixes: vec!["click".to_string(), "read more".to_string()],
        }
    }
}

impl SummarizerConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sentences to select.
    pub fn with_num_sentences(mut self, k: usize) -> Self {
        self.num_sentences = k;
        self
    }

    /// Set the minimum candidate word count.
    pub fn with_min_sentence_words(mut self, min: usize) -> Self {
        self.min_sentence_words = min;
        self
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replace the noise prefix list.
    pub fn with_noise_prefixes(mut self, prefixes: &[&str]) -> Self {
        self.noise_prefixes = prefixes.iter().map(|p| p.to_lowercase()).collect();
        self
    }
}
