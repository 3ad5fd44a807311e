//! Search backend abstraction for the rankcheck harness
//!
//! This crate owns everything between the evaluation engine and the search
//! service: the [`SearchBackend`] trait, an Elasticsearch-compatible HTTP
//! implementation, query-template rendering, and the ranked-ID fetcher with
//! its mandatory stable sort.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use rankcheck_core::error::Result;

mod fetch;
mod http;
mod template;

pub use fetch::fetch_ranked_ids;
pub use http::HttpSearchBackend;
pub use template::{parse_template, render_query, QUERY_PLACEHOLDER};

/// Sort direction for a single sort clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One entry of a search request's sort specification
///
/// Serializes to the search API's `{ "field": { "order": "asc" } }` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub order: SortOrder,
}

impl SortClause {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

impl Serialize for SortClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Direction {
            order: SortOrder,
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &Direction { order: self.order })?;
        map.end()
    }
}

/// Body of a search request
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: Value,
    pub size: usize,
    pub sort: Vec<SortClause>,
    #[serde(rename = "_source")]
    pub source: bool,
}

/// Total hit count envelope
#[derive(Debug, Clone, Deserialize)]
pub struct TotalHits {
    pub value: u64,
}

/// A single search hit; only the identifier is guaranteed
#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

/// The ordered hit list with its total
#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope {
    pub total: TotalHits,
    pub hits: Vec<Hit>,
}

/// Search response mirroring the standard full-text search API shape
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

/// Trait for search backends
///
/// The runner owns a single backend handle per invocation and shares it
/// immutably across all test cases; implementations must be safe to call
/// concurrently. Failures propagate unmodified; retries, if any, belong to
/// the backend itself.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a query against an index, returning the ranked hit list
    async fn search(&self, index: &str, request: &SearchRequest) -> Result<SearchResponse>;

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<()>;
}
