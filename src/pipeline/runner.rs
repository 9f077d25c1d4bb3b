//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline
//! stages. Calling [`Pipeline::run`] executes them in order, threading
//! artifacts between stages and notifying an optional [`PipelineObserver`]
//! at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler monomorphizes
//! each combination into a unique concrete type. The zero-sized default
//! stages add no bytes and no runtime cost.

use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SELECT,
};
use crate::pipeline::traits::{Normalizer, Scorer, Selector};
use crate::summarizer::frequency::FrequencyScorer;
use crate::summarizer::normalizer::SentenceNormalizer;
use crate::summarizer::selector::TopKSelector;
use crate::types::{Summary, SummarizerConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `N`   | [`Normalizer`] | [`SentenceNormalizer`] |
/// | `Sc`  | [`Scorer`] | [`FrequencyScorer`] |
/// | `Sel` | [`Selector`] | [`TopKSelector`] |
#[derive(Debug, Clone)]
pub struct Pipeline<N, Sc, Sel> {
    pub normalizer: N,
    pub scorer: Sc,
    pub selector: Sel,
}

/// Type alias for the default term-frequency pipeline.
pub type FrequencyPipeline = Pipeline<SentenceNormalizer, FrequencyScorer, TopKSelector>;

impl FrequencyPipeline {
    /// Build the standard term-frequency pipeline with the shared English
    /// stopword set.
    pub fn frequency() -> Self {
        Pipeline {
            normalizer: SentenceNormalizer,
            scorer: FrequencyScorer::new(),
            selector: TopKSelector,
        }
    }

    /// Build the term-frequency pipeline for a config, honoring its
    /// stopword language.
    pub fn for_config(cfg: &SummarizerConfig) -> Self {
        let scorer = if cfg.language.eq_ignore_ascii_case("en") {
            FrequencyScorer::new()
        } else {
            FrequencyScorer::for_language(&cfg.language)
        };
        Pipeline {
            normalizer: SentenceNormalizer,
            scorer,
            selector: TopKSelector,
        }
    }
}

impl Default for FrequencyPipeline {
    fn default() -> Self {
        Self::frequency()
    }
}

impl<N, Sc, Sel> Pipeline<N, Sc, Sel>
where
    N: Normalizer,
    Sc: Scorer,
    Sel: Selector,
{
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// Stages run in order:
    /// 1. Normalize — segment and filter candidate sentences
    /// 2. Score — build the frequency table, score candidates
    /// 3. Select — rank by score and keep the top K
    ///
    /// The run is synchronous with no suspension points; invocations share
    /// nothing mutable, so the same pipeline may be used from many threads.
    pub fn run(
        &self,
        text: &str,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let sentences = self.normalizer.normalize(text, cfg);
        let report = StageReport::with_items(clock.elapsed(), sentences.len());
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_sentences(&sentences);

        // Stage 2: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scored = self.scorer.score(text, &sentences, cfg);
        let report = StageReport::with_items(clock.elapsed(), scored.len());
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scored(&scored);

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let summary = self.selector.select(scored, cfg);
        let report = StageReport::with_items(clock.elapsed(), summary.len());
        observer.on_stage_end(STAGE_SELECT, &report);

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{NoopObserver, TimingObserver};

    const ARTICLE: &str = "Click here to read more. \
        The quick brown fox jumps over the lazy dog near the riverbank today. \
        The quick brown fox returns again near the riverbank at dawn.";

    #[test]
    fn test_run_full_pipeline() {
        let pipeline = FrequencyPipeline::frequency();
        let cfg = SummarizerConfig::default();
        let summary = pipeline.run(ARTICLE, &cfg, &mut NoopObserver);

        assert_eq!(summary.len(), 2);
        // The "Click" sentence never reaches the output.
        assert!(summary.texts().all(|t| !t.starts_with("Click")));
    }

    #[test]
    fn test_run_empty_input() {
        let pipeline = FrequencyPipeline::frequency();
        let cfg = SummarizerConfig::default();
        let summary = pipeline.run("", &cfg, &mut NoopObserver);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_observer_sees_all_stages_in_order() {
        let pipeline = FrequencyPipeline::frequency();
        let cfg = SummarizerConfig::default();
        let mut observer = TimingObserver::new();
        pipeline.run(ARTICLE, &cfg, &mut observer);

        let stages: Vec<_> = observer.reports.iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_NORMALIZE, STAGE_SCORE, STAGE_SELECT]);
        // Normalizer kept 2 of the 3 sentences.
        assert_eq!(observer.reports[0].1.items, Some(2));
    }

    #[test]
    fn test_run_is_deterministic() {
        let pipeline = FrequencyPipeline::frequency();
        let cfg = SummarizerConfig::default();
        let first = pipeline.run(ARTICLE, &cfg, &mut NoopObserver);
        let second = pipeline.run(ARTICLE, &cfg, &mut NoopObserver);
        assert_eq!(first, second);
    }

    #[test]
    fn test_for_config_non_english() {
        let cfg = SummarizerConfig::default()
            .with_language("de")
            .with_min_sentence_words(3);
        let pipeline = FrequencyPipeline::for_config(&cfg);
        let summary = pipeline.run(
            "Der schnelle braune Fuchs springt. Der schnelle Fuchs kehrt heute wieder.",
            &cfg,
            &mut NoopObserver,
        );
        assert!(!summary.is_empty());
    }
}
