//! Test runner
//!
//! Drives the full per-case pipeline: render the domain's query template
//! with the case's search terms, fetch a bounded ranked-ID window from the
//! backend, evaluate, and record. Backend errors are isolated per case so
//! one unreachable query cannot sink the rest of the suite; fixture
//! validation and configuration errors abort the run before any network
//! call.

use std::sync::Arc;

use tracing::{debug, info, warn};

use rankcheck_client::{fetch_ranked_ids, parse_template, render_query, SearchBackend};
use rankcheck_core::cases::TestCase;
use rankcheck_core::config::Config;
use rankcheck_core::error::Result;
use rankcheck_core::evaluate::evaluate;
use rankcheck_core::verdict::{Outcome, Verdict};

use crate::domain::ContentDomain;
use crate::fixtures;
use crate::report::{CaseRecord, CaseStatus, Report};

/// Which cases a run covers
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Domains to run; empty means all
    pub domains: Vec<ContentDomain>,
    /// Case-insensitive substring filter on case IDs
    pub id_filter: Option<String>,
}

impl RunOptions {
    fn selected_domains(&self) -> Vec<ContentDomain> {
        if self.domains.is_empty() {
            ContentDomain::all().to_vec()
        } else {
            self.domains.clone()
        }
    }

    fn selects(&self, case: &TestCase) -> bool {
        match &self.id_filter {
            None => true,
            Some(filter) => case.id().to_lowercase().contains(&filter.to_lowercase()),
        }
    }
}

/// Runs fixture suites against a search backend
///
/// Owns the backend handle for the lifetime of one invocation and shares it
/// immutably across every case.
pub struct Runner {
    backend: Arc<dyn SearchBackend>,
    config: Config,
}

impl Runner {
    pub fn new(backend: Arc<dyn SearchBackend>, config: Config) -> Self {
        Self { backend, config }
    }

    /// Run the selected cases and aggregate their outcomes
    ///
    /// Cases execute sequentially; the report sorts records by case ID, so
    /// output order never depends on execution order.
    pub async fn run(&self, options: &RunOptions) -> Result<Report> {
        let mut report = Report::new();

        for domain in options.selected_domains() {
            let domain_config = self.config.domain(domain.as_str())?;
            let template = parse_template(&domain_config.template_source()?)?;
            let cases = fixtures::suite(domain)?;

            let selected: Vec<TestCase> =
                cases.into_iter().filter(|c| options.selects(c)).collect();
            info!(
                %domain,
                index = %domain_config.index,
                cases = selected.len(),
                "running relevance tests"
            );

            for case in selected {
                let meta = case.meta();
                let window = case.fetch_window().min(self.config.fetch.max_window);
                let query = render_query(&template, &meta.search_terms);
                debug!(id = %meta.id, window, "fetching results");

                let record = match fetch_ranked_ids(
                    self.backend.as_ref(),
                    &domain_config.index,
                    query,
                    window,
                    &self.config.fetch.tiebreak_field,
                )
                .await
                {
                    Ok(result_ids) => {
                        let verdict = evaluate(&case, &result_ids);
                        record_for(domain, &case, verdict)
                    }
                    Err(e) => {
                        warn!(id = %meta.id, "backend error: {e}");
                        CaseRecord {
                            id: meta.id.clone(),
                            domain,
                            status: CaseStatus::Errored,
                            message: Some(e.to_string()),
                            description: meta.description.clone(),
                        }
                    }
                };
                report.push(record);
            }
        }

        Ok(report)
    }
}

/// Map an evaluator verdict to a reported status, honoring known_failure
fn record_for(domain: ContentDomain, case: &TestCase, verdict: Verdict) -> CaseRecord {
    let meta = case.meta();
    let (status, message) = match (verdict.outcome, meta.known_failure) {
        (Outcome::Pass, false) => (CaseStatus::Passed, None),
        (Outcome::Fail, false) => (CaseStatus::Failed, verdict.message),
        (Outcome::Warn, _) => (CaseStatus::Warned, verdict.message),
        (Outcome::Fail, true) => (CaseStatus::ExpectedFailure, verdict.message),
        (Outcome::Pass, true) => (
            CaseStatus::UnexpectedPass,
            Some("test unexpectedly passed; remove the known_failure flag".to_string()),
        ),
    };

    CaseRecord {
        id: meta.id.clone(),
        domain,
        status,
        message,
        description: meta.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankcheck_core::cases::{OrderCase, PrecisionCase, RecallCase};

    #[test]
    fn known_failure_inverts_fail_to_expected_failure() {
        let case = TestCase::from(
            RecallCase::new("q", ["a"]).unwrap().with_known_failure(true),
        );
        let record = record_for(ContentDomain::Works, &case, Verdict::fail("[a] not found"));
        assert_eq!(record.status, CaseStatus::ExpectedFailure);
        assert_eq!(record.message.as_deref(), Some("[a] not found"));
    }

    #[test]
    fn known_failure_flags_unexpected_pass_as_warning() {
        let case = TestCase::from(
            PrecisionCase::new("q", ["a"]).unwrap().with_known_failure(true),
        );
        let record = record_for(ContentDomain::Works, &case, Verdict::pass());
        assert_eq!(record.status, CaseStatus::UnexpectedPass);
        assert!(record
            .message
            .as_deref()
            .unwrap()
            .contains("remove the known_failure flag"));
        assert!(!record.status.is_failure());
    }

    #[test]
    fn plain_verdicts_map_directly() {
        let case = TestCase::from(OrderCase::new("q", ["a"], ["z"]).unwrap());
        assert_eq!(
            record_for(ContentDomain::Images, &case, Verdict::pass()).status,
            CaseStatus::Passed
        );
        assert_eq!(
            record_for(ContentDomain::Images, &case, Verdict::fail("boom")).status,
            CaseStatus::Failed
        );
    }

    #[test]
    fn id_filter_matches_case_insensitively() {
        let options = RunOptions {
            domains: vec![],
            id_filter: Some("PIGGLE".to_string()),
        };
        let matching = TestCase::from(PrecisionCase::new("The Piggle", ["q4drcxc6"]).unwrap());
        let other = TestCase::from(PrecisionCase::new("cow", ["wm8wy47d"]).unwrap());
        assert!(options.selects(&matching));
        assert!(!options.selects(&other));
    }

    #[test]
    fn empty_domain_list_selects_all() {
        let options = RunOptions::default();
        assert_eq!(options.selected_domains(), ContentDomain::all().to_vec());
    }
}
