//! Run reports
//!
//! Aggregates per-case outcomes into a summary with deterministic ordering:
//! records are sorted by case ID before rendering, regardless of execution
//! order, so CI output is reproducible.

use std::fmt::Write as _;

use crate::domain::ContentDomain;

/// Final status of one test case within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    /// The assertion held
    Passed,
    /// The assertion did not hold
    Failed,
    /// The evaluator raised a warning
    Warned,
    /// The backend call failed; the assertion was never evaluated
    Errored,
    /// The assertion failed, as the known_failure flag predicted
    ExpectedFailure,
    /// The assertion passed despite the known_failure flag
    UnexpectedPass,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Passed => "PASS",
            CaseStatus::Failed => "FAIL",
            CaseStatus::Warned => "WARN",
            CaseStatus::Errored => "ERROR",
            CaseStatus::ExpectedFailure => "XFAIL",
            CaseStatus::UnexpectedPass => "XPASS",
        }
    }

    /// Whether this status should fail the run
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseStatus::Failed | CaseStatus::Errored)
    }
}

/// Outcome of one test case
#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub id: String,
    pub domain: ContentDomain,
    pub status: CaseStatus,
    /// Diagnostic from the evaluator or the backend error
    pub message: Option<String>,
    /// The case's description field, surfaced verbatim
    pub description: Option<String>,
}

/// Aggregate counts over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounts {
    pub passed: usize,
    pub failed: usize,
    pub warned: usize,
    pub errored: usize,
    pub expected_failures: usize,
    pub unexpected_passes: usize,
}

/// All case records from one run
#[derive(Debug, Default)]
pub struct Report {
    records: Vec<CaseRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CaseRecord) {
        self.records.push(record);
    }

    /// Records sorted by case ID for deterministic output
    pub fn sorted_records(&self) -> Vec<&CaseRecord> {
        let mut records: Vec<&CaseRecord> = self.records.iter().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    pub fn counts(&self) -> ReportCounts {
        let mut counts = ReportCounts::default();
        for record in &self.records {
            match record.status {
                CaseStatus::Passed => counts.passed += 1,
                CaseStatus::Failed => counts.failed += 1,
                CaseStatus::Warned => counts.warned += 1,
                CaseStatus::Errored => counts.errored += 1,
                CaseStatus::ExpectedFailure => counts.expected_failures += 1,
                CaseStatus::UnexpectedPass => counts.unexpected_passes += 1,
            }
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no case failed and no backend error occurred
    pub fn is_success(&self) -> bool {
        self.records.iter().all(|r| !r.status.is_failure())
    }

    /// Render the report as printable text
    pub fn render(&self) -> String {
        let mut out = String::new();

        for record in self.sorted_records() {
            let _ = writeln!(
                out,
                "[{:5}] {} ({})",
                record.status.label(),
                record.id,
                record.domain
            );

            if record.status == CaseStatus::Passed {
                continue;
            }
            if let Some(description) = &record.description {
                let _ = writeln!(out, "        {description}");
            }
            if let Some(message) = &record.message {
                for line in message.lines() {
                    let _ = writeln!(out, "        {line}");
                }
            }
        }

        let counts = self.counts();
        let _ = writeln!(
            out,
            "\n{} passed, {} failed, {} warned, {} errored, {} expected failures, {} unexpected passes",
            counts.passed,
            counts.failed,
            counts.warned,
            counts.errored,
            counts.expected_failures,
            counts.unexpected_passes
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, status: CaseStatus) -> CaseRecord {
        CaseRecord {
            id: id.to_string(),
            domain: ContentDomain::Works,
            status,
            message: None,
            description: None,
        }
    }

    #[test]
    fn records_render_sorted_by_id() {
        let mut report = Report::new();
        report.push(record("zebra", CaseStatus::Passed));
        report.push(record("aardvark", CaseStatus::Passed));
        report.push(record("mongoose", CaseStatus::Passed));

        let ids: Vec<&str> = report.sorted_records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["aardvark", "mongoose", "zebra"]);
    }

    #[test]
    fn counts_cover_every_status() {
        let mut report = Report::new();
        report.push(record("a", CaseStatus::Passed));
        report.push(record("b", CaseStatus::Failed));
        report.push(record("c", CaseStatus::Warned));
        report.push(record("d", CaseStatus::Errored));
        report.push(record("e", CaseStatus::ExpectedFailure));
        report.push(record("f", CaseStatus::UnexpectedPass));

        assert_eq!(
            report.counts(),
            ReportCounts {
                passed: 1,
                failed: 1,
                warned: 1,
                errored: 1,
                expected_failures: 1,
                unexpected_passes: 1,
            }
        );
    }

    #[test]
    fn failure_and_error_fail_the_run() {
        let mut report = Report::new();
        report.push(record("a", CaseStatus::Passed));
        assert!(report.is_success());

        report.push(record("b", CaseStatus::Errored));
        assert!(!report.is_success());
    }

    #[test]
    fn expected_failure_and_unexpected_pass_do_not_fail_the_run() {
        let mut report = Report::new();
        report.push(record("a", CaseStatus::ExpectedFailure));
        report.push(record("b", CaseStatus::UnexpectedPass));
        report.push(record("c", CaseStatus::Warned));
        assert!(report.is_success());
    }

    #[test]
    fn render_includes_description_and_message_for_failures() {
        let mut report = Report::new();
        report.push(CaseRecord {
            id: "stimming".to_string(),
            domain: ContentDomain::Works,
            status: CaseStatus::Failed,
            message: Some("[a, b] not found in the search results".to_string()),
            description: Some("Ensure that we return non-typos over typos".to_string()),
        });

        let rendered = report.render();
        assert!(rendered.contains("[FAIL ] stimming (works)"));
        assert!(rendered.contains("Ensure that we return non-typos over typos"));
        assert!(rendered.contains("[a, b] not found"));
        assert!(rendered.contains("1 failed"));
    }
}
