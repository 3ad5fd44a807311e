//! Relevance test case model
//!
//! A test case couples free-text search terms with an assertion about the
//! ranked result list: Recall (IDs must appear within a rank threshold),
//! Precision (IDs must occupy the first positions), or Order (some IDs must
//! rank above others). Cases are declared statically as fixtures and are
//! immutable after construction; all invariants are checked at construction
//! time so a malformed fixture fails the run before any query is issued.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Last 1-indexed rank at which an expected ID still satisfies a recall
/// assertion, unless the case overrides it.
pub const DEFAULT_THRESHOLD_POSITION: usize = 10_000;

/// Fixed scan threshold for order assertions (not configurable per case).
pub const ORDER_THRESHOLD_POSITION: usize = 10_000;

/// Fields shared by every test case kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMeta {
    /// Unique identifier, used for selection by substring match.
    /// Defaults to the search terms when not set explicitly.
    pub id: String,
    /// The free-text query input
    pub search_terms: String,
    /// Optional rationale, surfaced verbatim in failure diagnostics
    pub description: Option<String>,
    /// Expected-failure marker: inverts pass/fail reporting semantics
    pub known_failure: bool,
}

impl CaseMeta {
    fn new(search_terms: impl Into<String>) -> Self {
        let search_terms = search_terms.into();
        Self {
            id: search_terms.clone(),
            search_terms,
            description: None,
            known_failure: false,
        }
    }
}

/// A recall assertion: every expected ID must appear somewhere within the
/// top `threshold_position` results, and no forbidden ID may appear there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecallCase {
    pub meta: CaseMeta,
    pub expected_ids: Vec<String>,
    pub forbidden_ids: Vec<String>,
    pub threshold_position: usize,
}

impl RecallCase {
    /// Create a recall case, validating that `expected_ids` is non-empty and
    /// free of duplicates.
    pub fn new<I, S>(search_terms: impl Into<String>, expected_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected_ids: Vec<String> = expected_ids.into_iter().map(Into::into).collect();
        ensure_non_empty("expected_ids", &expected_ids)?;
        ensure_unique("expected_ids", &expected_ids)?;
        Ok(Self {
            meta: CaseMeta::new(search_terms),
            expected_ids,
            forbidden_ids: Vec::new(),
            threshold_position: DEFAULT_THRESHOLD_POSITION,
        })
    }

    /// IDs that must never appear in the scanned window
    pub fn with_forbidden_ids<I, S>(mut self, forbidden_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_ids = forbidden_ids.into_iter().map(Into::into).collect();
        ensure_unique("forbidden_ids", &self.forbidden_ids)?;
        Ok(self)
    }

    pub fn with_threshold_position(mut self, threshold_position: usize) -> Self {
        self.threshold_position = threshold_position;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_known_failure(mut self, known_failure: bool) -> Self {
        self.meta.known_failure = known_failure;
        self
    }
}

/// A precision assertion: the expected IDs must occupy exactly the first N
/// result positions, ordered when `strict`, as an unordered set otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionCase {
    pub meta: CaseMeta,
    pub expected_ids: Vec<String>,
    pub strict: bool,
}

impl PrecisionCase {
    /// Create a precision case, validating that `expected_ids` is non-empty
    /// and free of duplicates.
    pub fn new<I, S>(search_terms: impl Into<String>, expected_ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected_ids: Vec<String> = expected_ids.into_iter().map(Into::into).collect();
        ensure_non_empty("expected_ids", &expected_ids)?;
        ensure_unique("expected_ids", &expected_ids)?;
        Ok(Self {
            meta: CaseMeta::new(search_terms),
            expected_ids,
            strict: false,
        })
    }

    /// Require the expected IDs in the exact order given
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_known_failure(mut self, known_failure: bool) -> Self {
        self.meta.known_failure = known_failure;
        self
    }
}

/// An order assertion: every `before_id` observed in the scanned window must
/// appear in the result stream ahead of any observed `after_id`. The
/// `after_ids` are not required to appear at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCase {
    pub meta: CaseMeta,
    pub before_ids: Vec<String>,
    pub after_ids: Vec<String>,
}

impl OrderCase {
    /// Create an order case, validating that both sets are non-empty, free of
    /// duplicates, and disjoint.
    pub fn new<I, J, S, T>(search_terms: impl Into<String>, before_ids: I, after_ids: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let before_ids: Vec<String> = before_ids.into_iter().map(Into::into).collect();
        let after_ids: Vec<String> = after_ids.into_iter().map(Into::into).collect();
        ensure_non_empty("before_ids", &before_ids)?;
        ensure_non_empty("after_ids", &after_ids)?;
        ensure_unique("before_ids", &before_ids)?;
        ensure_unique("after_ids", &after_ids)?;

        let before_set: HashSet<&str> = before_ids.iter().map(String::as_str).collect();
        let mut overlap: Vec<&str> = after_ids
            .iter()
            .map(String::as_str)
            .filter(|id| before_set.contains(id))
            .collect();
        if !overlap.is_empty() {
            overlap.sort_unstable();
            return Err(Error::validation(format!(
                "before_ids and after_ids must not contain the same IDs: {}",
                overlap.join(", ")
            )));
        }

        Ok(Self {
            meta: CaseMeta::new(search_terms),
            before_ids,
            after_ids,
        })
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_known_failure(mut self, known_failure: bool) -> Self {
        self.meta.known_failure = known_failure;
        self
    }
}

/// Closed sum of the three assertion kinds
///
/// The runner matches exhaustively on this, so a new case kind cannot be
/// added without also providing its evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCase {
    Recall(RecallCase),
    Precision(PrecisionCase),
    Order(OrderCase),
}

impl TestCase {
    /// Fields shared by every case kind
    pub fn meta(&self) -> &CaseMeta {
        match self {
            TestCase::Recall(c) => &c.meta,
            TestCase::Precision(c) => &c.meta,
            TestCase::Order(c) => &c.meta,
        }
    }

    /// The case identifier used for selection and reporting
    pub fn id(&self) -> &str {
        &self.meta().id
    }

    /// Number of ranked results the fetcher must supply for the evaluator to
    /// examine its full window.
    pub fn fetch_window(&self) -> usize {
        match self {
            TestCase::Recall(c) => c.threshold_position.max(c.expected_ids.len() + 1),
            TestCase::Precision(c) => c.expected_ids.len(),
            TestCase::Order(_) => ORDER_THRESHOLD_POSITION,
        }
    }
}

impl From<RecallCase> for TestCase {
    fn from(case: RecallCase) -> Self {
        TestCase::Recall(case)
    }
}

impl From<PrecisionCase> for TestCase {
    fn from(case: PrecisionCase) -> Self {
        TestCase::Precision(case)
    }
}

impl From<OrderCase> for TestCase {
    fn from(case: OrderCase) -> Self {
        TestCase::Order(case)
    }
}

fn ensure_non_empty(field: &str, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn ensure_unique(field: &str, ids: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(Error::validation(format!(
                "{field} must be unique, found duplicate '{id}'"
            )));
        }
    }
    Ok(())
}
