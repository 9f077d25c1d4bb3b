//! Top-K sentence selection.
//!
//! Ranks scored sentences by score descending and keeps the first K. The
//! sort is stable, so equal scores preserve the normalizer's sentence order
//! and results are reproducible across runs on identical input.

use crate::pipeline::traits::Selector;
use crate::types::{ScoredSentence, Summary, SummarizerConfig};

/// Selects the K highest-scoring sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopKSelector;

impl TopKSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Selector for TopKSelector {
    fn select(&self, mut scored: Vec<ScoredSentence>, cfg: &SummarizerConfig) -> Summary {
        // sort_by_key is stable: ties keep original sentence order.
        scored.sort_by_key(|s| std::cmp::Reverse(s.score));
        scored.truncate(cfg.num_sentences);
        Summary { sentences: scored }
    }
}
