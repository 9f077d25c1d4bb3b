//! Pipeline composition, observability, and configuration.
//!
//! This module wires the summarization stages together: stage traits, the
//! statically-dispatched runner, observer hooks, and the JSON-facing spec
//! plus its validation engine.

pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
