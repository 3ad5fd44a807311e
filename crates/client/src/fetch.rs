//! Ranked-ID fetching with a stable sort
//!
//! Search backends do not guarantee a deterministic ordering among
//! equal-scored documents, which makes recall and order assertions flaky by
//! construction. Every fetch therefore sorts by relevance score descending
//! with a caller-specified tie-break field ascending, so repeated identical
//! queries yield byte-identical orderings.

use serde_json::Value;

use rankcheck_core::error::Result;

use crate::{SearchBackend, SearchRequest, SortClause};

/// Fetch the top `size` document identifiers for a rendered query
///
/// Only IDs are requested (`_source: false`); `size` is an explicit bound
/// and must be at least as large as the window the evaluator will examine.
pub async fn fetch_ranked_ids(
    backend: &dyn SearchBackend,
    index: &str,
    query: Value,
    size: usize,
    tiebreak_field: &str,
) -> Result<Vec<String>> {
    let request = SearchRequest {
        query,
        size,
        sort: vec![SortClause::desc("_score"), SortClause::asc(tiebreak_field)],
        source: false,
    };

    let response = backend.search(index, &request).await?;
    Ok(response.hits.hits.into_iter().map(|hit| hit.id).collect())
}
