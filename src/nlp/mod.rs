//! Natural language processing components.
//!
//! This module provides word tokenization, whitespace normalization, and
//! stopword filtering.

pub mod stopwords;
pub mod tokenizer;
