//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and capturing intermediate
//! artifacts for debugging.

use std::time::{Duration, Instant};

use crate::types::{ScoredSentence, Sentence};

/// Stage name for the normalizer.
pub const STAGE_NORMALIZE: &str = "normalize";
/// Stage name for the scorer.
pub const STAGE_SCORE: &str = "score";
/// Stage name for the selector.
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Timing and size report for a completed stage.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    /// Wall-clock duration of the stage.
    pub elapsed: Duration,
    /// Number of items the stage produced, when meaningful.
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn with_items(elapsed: Duration, items: usize) -> Self {
        Self {
            elapsed,
            items: Some(items),
        }
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods have empty defaults, so implementors override only what they
/// need. Pass [`NoopObserver`] for zero-overhead execution.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// Candidate sentences leaving the normalizer.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}
    /// Scored sentences leaving the scorer.
    fn on_scored(&mut self, _scored: &[ScoredSentence]) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report, in order.
#[derive(Debug, Clone, Default)]
pub struct TimingObserver {
    pub reports: Vec<(&'static str, StageReport)>,
}

impl TimingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineObserver for TimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_clock_measures_time() {
        let clock = StageClock::start();
        let elapsed = clock.elapsed();
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_stage_report_constructors() {
        let r = StageReport::new(Duration::from_millis(1));
        assert!(r.items.is_none());

        let r = StageReport::with_items(Duration::from_millis(1), 4);
        assert_eq!(r.items, Some(4));
    }

    #[test]
    fn test_timing_observer_records_reports() {
        let mut observer = TimingObserver::new();
        observer.on_stage_start(STAGE_NORMALIZE);
        observer.on_stage_end(STAGE_NORMALIZE, &StageReport::with_items(Duration::ZERO, 2));
        observer.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::ZERO));

        assert_eq!(observer.reports.len(), 2);
        assert_eq!(observer.reports[0].0, STAGE_NORMALIZE);
        assert_eq!(observer.reports[0].1.items, Some(2));
        assert_eq!(observer.reports[1].0, STAGE_SCORE);
    }

    #[test]
    fn test_noop_observer_accepts_all_callbacks() {
        let mut observer = NoopObserver;
        observer.on_stage_start(STAGE_SELECT);
        observer.on_sentences(&[]);
        observer.on_scored(&[]);
        observer.on_stage_end(STAGE_SELECT, &StageReport::default());
    }
}
