//! Query template rendering
//!
//! Templates are JSON query bodies with a `{{query}}` placeholder inside one
//! or more string values. Substitution happens at the object level, after
//! parsing: the template is walked as a `serde_json::Value` and the search
//! terms are spliced into string leaves. Search terms containing quotes or
//! other JSON-significant characters therefore cannot produce a malformed
//! query body.

use serde_json::Value;

use rankcheck_core::error::{Error, Result};

/// Placeholder replaced by the case's search terms
pub const QUERY_PLACEHOLDER: &str = "{{query}}";

/// Parse a template source into a JSON value, requiring the placeholder
///
/// A template that never mentions `{{query}}` would run the same query for
/// every test case, so its absence is reported as a template error at load
/// time rather than producing meaningless verdicts later.
pub fn parse_template(source: &str) -> Result<Value> {
    let template: Value = serde_json::from_str(source)
        .map_err(|e| Error::template(format!("query template is not valid JSON: {e}")))?;
    if !contains_placeholder(&template) {
        return Err(Error::template(format!(
            "query template has no {QUERY_PLACEHOLDER} placeholder"
        )));
    }
    Ok(template)
}

/// Render a parsed template with the given search terms
pub fn render_query(template: &Value, search_terms: &str) -> Value {
    let mut rendered = template.clone();
    substitute(&mut rendered, search_terms);
    rendered
}

fn contains_placeholder(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains(QUERY_PLACEHOLDER),
        Value::Array(items) => items.iter().any(contains_placeholder),
        Value::Object(map) => map.values().any(contains_placeholder),
        _ => false,
    }
}

fn substitute(value: &mut Value, search_terms: &str) {
    match value {
        Value::String(s) => {
            if s.contains(QUERY_PLACEHOLDER) {
                *s = s.replace(QUERY_PLACEHOLDER, search_terms);
            }
        }
        Value::Array(items) => {
            for item in items {
                substitute(item, search_terms);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                substitute(item, search_terms);
            }
        }
        _ => {}
    }
}
