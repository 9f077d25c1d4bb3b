//! Validation engine for summarizer specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`] and collects every diagnostic into a
//! [`ValidationReport`] — it never short-circuits on the first error, so
//! users see all problems at once.

use serde::Serialize;
use thiserror::Error;

use super::spec::{SummarySpec, SPEC_VERSION};

// ─── Error codes ────────────────────────────────────────────────────────────

/// Stable machine-readable codes for spec diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnsupportedVersion,
    UnknownField,
    ZeroSentences,
    ZeroMinWords,
    EmptyNoisePrefix,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownField => "unknown_field",
            Self::ZeroSentences => "zero_sentences",
            Self::ZeroMinWords => "zero_min_words",
            Self::EmptyNoisePrefix => "empty_noise_prefix",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single spec problem: code, JSON path, message, and an optional hint.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{code} at `{path}`: {message}")]
pub struct SpecViolation {
    pub code: ErrorCode,
    /// JSON path of the offending field (e.g., `num_sentences`).
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecViolation {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// ─── Severity & diagnostics ─────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub violation: SpecViolation,
}

impl ValidationDiagnostic {
    pub fn error(violation: SpecViolation) -> Self {
        Self {
            severity: Severity::Error,
            violation,
        }
    }

    pub fn warning(violation: SpecViolation) -> Self {
        Self {
            severity: Severity::Warning,
            violation,
        }
    }
}

/// All diagnostics produced by a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &SpecViolation> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.violation)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecViolation> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.violation)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// One check over a spec. Rules push diagnostics; they never abort the run.
pub trait ValidationRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>);
}

/// The spec version must be one this crate understands.
struct VersionRule;

impl ValidationRule for VersionRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>) {
        if spec.v != SPEC_VERSION {
            out.push(ValidationDiagnostic::error(
                SpecViolation::new(
                    ErrorCode::UnsupportedVersion,
                    "v",
                    format!("unsupported spec version {}", spec.v),
                )
                .with_hint(format!("this crate supports version {SPEC_VERSION}")),
            ));
        }
    }
}

/// `num_sentences: 0` is legal but always yields an empty summary.
struct ZeroSentencesRule;

impl ValidationRule for ZeroSentencesRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>) {
        if spec.num_sentences == Some(0) {
            out.push(ValidationDiagnostic::warning(SpecViolation::new(
                ErrorCode::ZeroSentences,
                "num_sentences",
                "num_sentences is 0; every summary will be empty",
            )));
        }
    }
}

/// `min_sentence_words: 0` disables the length filter entirely.
struct ZeroMinWordsRule;

impl ValidationRule for ZeroMinWordsRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>) {
        if spec.min_sentence_words == Some(0) {
            out.push(ValidationDiagnostic::warning(SpecViolation::new(
                ErrorCode::ZeroMinWords,
                "min_sentence_words",
                "min_sentence_words is 0; the length filter is disabled",
            )));
        }
    }
}

/// An empty noise prefix matches every sentence.
struct EmptyNoisePrefixRule;

impl ValidationRule for EmptyNoisePrefixRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>) {
        if let Some(prefixes) = &spec.noise_prefixes {
            for (i, prefix) in prefixes.iter().enumerate() {
                if prefix.is_empty() {
                    out.push(ValidationDiagnostic::error(
                        SpecViolation::new(
                            ErrorCode::EmptyNoisePrefix,
                            format!("noise_prefixes[{i}]"),
                            "empty prefix matches every sentence",
                        )
                        .with_hint("remove the empty entry"),
                    ));
                }
            }
        }
    }
}

/// Unknown fields are errors in strict mode, warnings otherwise.
struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn check(&self, spec: &SummarySpec, out: &mut Vec<ValidationDiagnostic>) {
        let mut names: Vec<&String> = spec.unknown_fields.keys().collect();
        names.sort(); // deterministic diagnostic order
        for name in names {
            let violation = SpecViolation::new(
                ErrorCode::UnknownField,
                name.clone(),
                format!("unrecognized field `{name}`"),
            );
            if spec.strict {
                out.push(ValidationDiagnostic::error(violation));
            } else {
                out.push(ValidationDiagnostic::warning(violation));
            }
        }
    }
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs every rule and collects all diagnostics.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ValidationEngine {
    /// Engine with the built-in rule set.
    pub fn with_defaults() -> Self {
        Self {
            rules: vec![
                Box::new(VersionRule),
                Box::new(ZeroSentencesRule),
                Box::new(ZeroMinWordsRule),
                Box::new(EmptyNoisePrefixRule),
                Box::new(UnknownFieldsRule),
            ],
        }
    }

    /// Validate a spec against every rule.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            rule.check(spec, &mut diagnostics);
        }
        ValidationReport { diagnostics }
    }
}
