//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the default impls live in [`crate::summarizer`].

use crate::types::{ScoredSentence, Sentence, Summary, SummarizerConfig};

/// Sentence segmentation and noise filtering (stage 1).
///
/// # Contract
///
/// - **Input**: arbitrary raw text, possibly empty or all whitespace.
/// - **Output**: surviving candidate sentences in document order, each with
///   a sequential `index`. Order is significant: it is the tie-break key for
///   the selector.
/// - **Pure**: no side effects; identical input yields identical output.
///
/// Implementations must never emit a sentence below the configured word
/// minimum or one starting with a configured noise prefix.
pub trait Normalizer {
    /// Segment and filter `text` into candidate sentences.
    fn normalize(&self, text: &str, cfg: &SummarizerConfig) -> Vec<Sentence>;
}

/// Sentence scoring (stage 2).
///
/// # Contract
///
/// - **Input**: the same raw text the normalizer saw (frequency statistics
///   cover the whole text, not just survivors) plus the candidate sentences.
/// - **Output**: scored sentences with score > 0; zero-scored candidates are
///   excluded entirely. No ordering guarantee.
/// - **Total**: never fails for any string input.
pub trait Scorer {
    /// Score each candidate sentence against the full text.
    fn score(
        &self,
        text: &str,
        sentences: &[Sentence],
        cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence>;
}

/// Ranking and truncation (stage 3).
///
/// # Contract
///
/// - **Input**: scored sentences in normalizer order.
/// - **Output**: up to `cfg.num_sentences` sentences by descending score;
///   equal scores keep their input order (stable sort requirement).
pub trait Selector {
    /// Rank and keep the top K sentences.
    fn select(&self, scored: Vec<ScoredSentence>, cfg: &SummarizerConfig) -> Summary;
}
