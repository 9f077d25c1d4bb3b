//! Extractive summarization stages.
//!
//! Three stages compose the pipeline: sentence normalization, term-frequency
//! scoring, and top-K selection. Each is a pure function of its input.

pub mod frequency;
pub mod normalizer;
pub mod selector;
