//! End-to-end runner tests against a scripted in-memory backend
//!
//! The backend resolves each rendered query back to its search terms and
//! serves a canned ranked ID list, so the full render/fetch/evaluate/report
//! pipeline runs without a live search service.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use rankcheck_client::{Hit, HitsEnvelope, SearchBackend, SearchRequest, SearchResponse, TotalHits};
use rankcheck_core::cases::TestCase;
use rankcheck_core::config::{BackendConfig, Config, DomainConfig, FetchConfig};
use rankcheck_core::error::{Error, Result};
use rankcheck_runner::{fixtures, CaseStatus, ContentDomain, RunOptions, Runner};

const TEMPLATE: &str = r#"{ "match": { "title": "{{query}}" } }"#;

/// Backend serving canned ranked IDs keyed by search terms
struct ScriptedBackend {
    responses: HashMap<String, Vec<String>>,
    error_terms: Vec<String>,
}

impl ScriptedBackend {
    fn new(responses: HashMap<String, Vec<String>>) -> Self {
        Self {
            responses,
            error_terms: Vec::new(),
        }
    }

    fn with_error_for(mut self, terms: &str) -> Self {
        self.error_terms.push(terms.to_string());
        self
    }

    fn search_terms_of(request: &SearchRequest) -> Option<&str> {
        request.query.get("match")?.get("title")?.as_str()
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn search(&self, _index: &str, request: &SearchRequest) -> Result<SearchResponse> {
        let terms = Self::search_terms_of(request)
            .ok_or_else(|| Error::backend("unexpected query shape"))?;

        if self.error_terms.iter().any(|t| t == terms) {
            return Err(Error::backend(format!("simulated outage for '{terms}'")));
        }

        let ids = self.responses.get(terms).cloned().unwrap_or_default();
        let hits: Vec<Hit> = ids
            .into_iter()
            .take(request.size)
            .enumerate()
            .map(|(i, id)| Hit {
                id,
                score: Some(100.0 - i as f64),
                source: None,
            })
            .collect();

        Ok(SearchResponse {
            hits: HitsEnvelope {
                total: TotalHits {
                    value: hits.len() as u64,
                },
                hits,
            },
        })
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

fn test_config() -> Config {
    let domain = |index: &str| DomainConfig {
        index: index.to_string(),
        query_template: Some(TEMPLATE.to_string()),
        query_template_path: None,
    };
    Config {
        backend: BackendConfig {
            url: "http://localhost:9200".to_string(),
            username: None,
            timeout_secs: 5,
        },
        fetch: FetchConfig::default(),
        domains: [
            ("works".to_string(), domain("works-test")),
            ("images".to_string(), domain("images-test")),
        ]
        .into_iter()
        .collect(),
    }
}

/// Canned responses that satisfy every case in a suite
fn satisfying_responses(domain: ContentDomain) -> HashMap<String, Vec<String>> {
    let mut responses: HashMap<String, Vec<String>> = HashMap::new();
    for case in fixtures::suite(domain).unwrap() {
        let ids: Vec<String> = match &case {
            TestCase::Recall(c) => c.expected_ids.clone(),
            TestCase::Precision(c) => c.expected_ids.clone(),
            TestCase::Order(c) => c
                .before_ids
                .iter()
                .chain(c.after_ids.iter())
                .cloned()
                .collect(),
        };
        // Cases sharing search terms (the two "aids poster" order cases)
        // get one merged response that satisfies both.
        let entry = responses
            .entry(case.meta().search_terms.clone())
            .or_default();
        for id in ids {
            if !entry.contains(&id) {
                entry.push(id);
            }
        }
    }
    responses
}

#[tokio::test]
async fn single_case_passes_against_canned_results() {
    let backend = ScriptedBackend::new(
        [(
            "horse battle".to_string(),
            vec!["other1".to_string(), "ud35y7c8".to_string()],
        )]
        .into_iter()
        .collect(),
    );
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Images],
        id_filter: Some("horse battle".to_string()),
    };

    let report = runner.run(&options).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.counts().passed, 1);
    assert!(report.is_success());
}

#[tokio::test]
async fn backend_error_is_isolated_to_its_case() {
    let backend = ScriptedBackend::new(satisfying_responses(ContentDomain::Images))
        .with_error_for("crick dna sketch");
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Images],
        id_filter: None,
    };

    let report = runner.run(&options).await.unwrap();
    let counts = report.counts();
    assert_eq!(counts.errored, 1, "exactly the outage case errors");
    assert_eq!(counts.failed, 0, "other cases still ran and passed");
    assert!(counts.passed > 0);
    assert!(!report.is_success());

    let errored: Vec<_> = report
        .sorted_records()
        .into_iter()
        .filter(|r| r.status == CaseStatus::Errored)
        .collect();
    assert_eq!(errored.len(), 1);
    assert_eq!(errored[0].id, "crick dna sketch");
    assert!(errored[0]
        .message
        .as_deref()
        .unwrap()
        .contains("simulated outage"));
}

#[tokio::test]
async fn known_failure_case_that_passes_is_flagged() {
    // "The Piggle" is marked known_failure; serving its expected ID first
    // makes the evaluator pass, which the runner must report as an anomaly.
    let backend = ScriptedBackend::new(
        [("The Piggle".to_string(), vec!["q4drcxc6".to_string()])]
            .into_iter()
            .collect(),
    );
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Works],
        id_filter: Some("piggle".to_string()),
    };

    let report = runner.run(&options).await.unwrap();
    assert_eq!(report.counts().unexpected_passes, 1);
    assert!(report.is_success(), "an unexpected pass is a warning, not a failure");
}

#[tokio::test]
async fn known_failure_case_that_fails_counts_as_expected() {
    // Empty results make the evaluator fail; known_failure downgrades it.
    let backend = ScriptedBackend::new(HashMap::new());
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Works],
        id_filter: Some("piggle".to_string()),
    };

    let report = runner.run(&options).await.unwrap();
    assert_eq!(report.counts().expected_failures, 1);
    assert!(report.is_success());
}

#[tokio::test]
async fn full_suite_passes_when_backend_satisfies_every_case() {
    let backend = ScriptedBackend::new(satisfying_responses(ContentDomain::Works));
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Works],
        id_filter: None,
    };

    let report = runner.run(&options).await.unwrap();
    let counts = report.counts();
    assert_eq!(counts.failed, 0);
    assert_eq!(counts.errored, 0);
    // known_failure cases now pass their assertions, so they surface as
    // unexpected passes rather than expected failures.
    assert!(counts.unexpected_passes > 0);
    assert!(report.is_success());
}

#[tokio::test]
async fn report_order_is_deterministic() {
    let backend = ScriptedBackend::new(satisfying_responses(ContentDomain::Images));
    let runner = Runner::new(Arc::new(backend), test_config());
    let options = RunOptions {
        domains: vec![ContentDomain::Images],
        id_filter: None,
    };

    let report = runner.run(&options).await.unwrap();
    let ids: Vec<String> = report
        .sorted_records()
        .iter()
        .map(|r| r.id.clone())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn missing_domain_config_aborts_the_run() {
    let mut config = test_config();
    config.domains.remove("images");
    let backend = ScriptedBackend::new(HashMap::new());
    let runner = Runner::new(Arc::new(backend), config);
    let options = RunOptions {
        domains: vec![ContentDomain::Images],
        id_filter: None,
    };

    let err = runner.run(&options).await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
