//! Term-frequency table and sentence scoring.
//!
//! The frequency table counts lowercase word tokens over the entire input
//! text, minus stopwords. A sentence's score is the sum of the table counts
//! for each of its non-stopword token occurrences.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::{self, StopwordFilter};
use crate::nlp::tokenizer::words;
use crate::pipeline::traits::Scorer;
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};

/// Occurrence counts of normalized (lowercase) words.
///
/// Built fresh per summarization call and discarded after.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Count word tokens over `text`, lowercased, skipping stopwords.
    pub fn build(text: &str, stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for token in words(text) {
            let token = token.to_lowercase();
            if stopwords.is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for a token. Lookup is exact on lowercase text.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of table counts over the non-stopword tokens of `text`.
    ///
    /// Repeated words contribute their frequency once per occurrence.
    pub fn score_text(&self, text: &str, stopwords: &StopwordFilter) -> u64 {
        let mut score = 0;
        for token in words(text) {
            let token = token.to_lowercase();
            if stopwords.is_stopword(&token) {
                continue;
            }
            score += self.get(&token);
        }
        score
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Scores sentences by summed term frequency over the whole text.
///
/// Zero-scored sentences are dropped entirely; they are non-candidates,
/// not low-ranked candidates.
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    stopwords: StopwordFilter,
}

impl Default for FrequencyScorer {
    fn default() -> Self {
        Self {
            stopwords: stopwords::english().clone(),
        }
    }
}

impl FrequencyScorer {
    /// Scorer backed by the shared English stopword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer for another stopword language.
    pub fn for_language(language: &str) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
        }
    }

    /// Scorer with a custom stopword filter.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }
}

impl Scorer for FrequencyScorer {
    fn score(
        &self,
        text: &str,
        sentences: &[Sentence],
        _cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence> {
        if sentences.is_empty() {
            return Vec::new();
        }
        // The table covers the entire text, not just surviving sentences.
        let table = FrequencyTable::build(text, &self.stopwords);
        sentences
            .iter()
            .filter_map(|sentence| {
                let score = table.score_text(&sentence.text, &self.stopwords);
                (score > 0).then(|| ScoredSentence {
                    sentence: sentence.clone(),
                    score,
                })
            })
            .collect()
    }
}
