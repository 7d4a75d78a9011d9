//! Failures produced by checks and the aggregate report raised by a lazy run.

use thiserror::Error;

/// Line that frames every failure inside an aggregate report.
pub const REPORT_SEPARATOR: &str = "-----------";

/// A predicate did not hold. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// The evaluator could not decide whether the predicate holds.
///
/// Unrelated to the assertion outcome: a lazy run stops at the first fault
/// instead of collecting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvaluatorFault {
    message: String,
}

impl EvaluatorFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of one evaluated check that did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Failed(#[from] CheckFailure),
    #[error(transparent)]
    Unexpected(#[from] EvaluatorFault),
}

/// Every failure collected during one lazy run, in registration order.
///
/// # Invariants
///
/// - Holds at least one failure; an empty aggregate cannot be constructed.
///
/// # Format
///
/// ```text
/// 2 lazy checks failed:
/// -----------
/// <failure message 1>
/// -----------
/// <failure message 2>
/// -----------
/// ```
///
/// The header uses the singular "check" when exactly one failure is held.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_report(.failures))]
pub struct AggregateFailure {
    failures: Vec<CheckFailure>,
}

impl AggregateFailure {
    /// Returns `None` when there is nothing to report.
    #[must_use]
    pub fn new(failures: Vec<CheckFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    #[must_use]
    pub fn failures(&self) -> &[CheckFailure] {
        &self.failures
    }

    /// Number of failed checks. Always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn into_failures(self) -> Vec<CheckFailure> {
        self.failures
    }
}

fn render_report(failures: &[CheckFailure]) -> String {
    let count = failures.len();
    let noun = if count == 1 { "check" } else { "checks" };
    let mut report = format!("{count} lazy {noun} failed:\n{REPORT_SEPARATOR}");
    for failure in failures {
        report.push('\n');
        report.push_str(failure.message());
        report.push('\n');
        report.push_str(REPORT_SEPARATOR);
    }
    report
}
