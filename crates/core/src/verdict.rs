//! Evaluation verdicts
//!
//! The output of a single evaluator invocation: a pass/fail/warn outcome
//! plus an optional diagnostic message (missing IDs, mis-ordered pairs,
//! forbidden-ID hits).

/// Outcome of evaluating one test case against one result window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Warn,
}

/// Verdict produced by an evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub message: Option<String>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            outcome: Outcome::Pass,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail,
            message: Some(message.into()),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Warn,
            message: Some(message.into()),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.outcome == Outcome::Fail
    }
}
