//! Deterministic term-frequency extractive summarization for news text.
//!
//! `tfrank` selects the most representative sentences of an article with no
//! model and no network: sentences are segmented, scored by the summed
//! frequency of their non-stopword terms over the whole text, and the top K
//! are returned in descending score order. Identical input always yields an
//! identical summary.
//!
//! # Quick start
//!
//! ```
//! let text = "Click here to read more. \
//!     The quick brown fox jumps over the lazy dog near the riverbank today. \
//!     The quick brown fox returns again near the riverbank at dawn.";
//!
//! let summary = tfrank::summarize(text, 6);
//! assert_eq!(summary.len(), 2);
//! assert!(summary.iter().all(|s| !s.starts_with("Click")));
//! ```
//!
//! # Pipeline
//!
//! Three stages run in order, each a pure function of its input:
//!
//! 1. **Normalize** — collapse whitespace, split at `.`/`!`/`?` followed by
//!    a space, drop sentences under the word minimum or starting with a
//!    boilerplate prefix ("click", "read more").
//! 2. **Score** — count lowercase word tokens over the entire text minus
//!    stopwords, then score each candidate by summing its tokens' counts.
//!    Zero-scored candidates are dropped.
//! 3. **Select** — stable sort by score descending, keep the first K.
//!
//! For custom stage compositions see [`pipeline::runner::Pipeline`]; for
//! JSON-driven configuration see [`pipeline::spec::SummarySpec`].

pub mod article;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use article::Article;
pub use pipeline::observer::{NoopObserver, PipelineObserver};
pub use pipeline::runner::{FrequencyPipeline, Pipeline};
pub use pipeline::spec::SummarySpec;
pub use types::{ScoredSentence, Sentence, Summary, SummarizerConfig};

use rayon::prelude::*;

/// Summarize `text` into at most `num_sentences` sentences.
///
/// Uses the default English pipeline. Empty or whitespace-only input yields
/// an empty vector, never an error.
pub fn summarize(text: &str, num_sentences: usize) -> Vec<String> {
    let cfg = SummarizerConfig::default().with_num_sentences(num_sentences);
    summarize_with_config(text, &cfg).into_texts()
}

/// Summarize `text` with an explicit configuration.
pub fn summarize_with_config(text: &str, cfg: &SummarizerConfig) -> Summary {
    FrequencyPipeline::for_config(cfg).run(text, cfg, &mut NoopObserver)
}

/// Summarize many texts in parallel.
///
/// Invocations are independent; the only shared state is the read-only
/// stopword set, so this is a straight data-parallel map.
pub fn summarize_batch<T: AsRef<str> + Sync>(texts: &[T], cfg: &SummarizerConfig) -> Vec<Summary> {
    let pipeline = FrequencyPipeline::for_config(cfg);
    texts
        .par_iter()
        .map(|text| pipeline.run(text.as_ref(), cfg, &mut NoopObserver))
        .collect()
}
