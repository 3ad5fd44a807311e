//! Test case evaluators
//!
//! One algorithm per assertion kind, each a pure function of
//! (test case, ranked result window) to [`Verdict`]. No state is held across
//! invocations, so the evaluators can be unit tested against canned ID
//! sequences without a live backend.
//!
//! Every scan is an explicit bounded loop over a pre-fetched window with a
//! break condition; the fetcher must supply at least
//! [`TestCase::fetch_window`](crate::cases::TestCase::fetch_window) entries
//! for the verdict to be authoritative.

use std::collections::HashSet;

use crate::cases::{OrderCase, PrecisionCase, RecallCase, TestCase, ORDER_THRESHOLD_POSITION};
use crate::verdict::Verdict;

/// Evaluate any test case against a ranked ID window
///
/// Exhaustive over the case kinds: adding a variant without an evaluator is
/// a compile error.
pub fn evaluate(case: &TestCase, result_ids: &[String]) -> Verdict {
    match case {
        TestCase::Recall(c) => evaluate_recall(c, result_ids),
        TestCase::Precision(c) => evaluate_precision(c, result_ids),
        TestCase::Order(c) => evaluate_order(c, result_ids),
    }
}

/// Scan the window for every expected ID, failing fast on a forbidden ID
///
/// Walks `result_ids` up to `max(threshold_position, expected_ids.len() + 1)`
/// entries. A forbidden ID fails immediately, before any further scanning.
/// Once every expected ID has been seen the scan stops early; the verdict is
/// identical to scanning the whole window.
pub fn evaluate_recall(case: &RecallCase, result_ids: &[String]) -> Verdict {
    let window = case.threshold_position.max(case.expected_ids.len() + 1);
    let forbidden: HashSet<&str> = case.forbidden_ids.iter().map(String::as_str).collect();
    let mut remaining: HashSet<&str> = case.expected_ids.iter().map(String::as_str).collect();

    for (position, doc_id) in result_ids.iter().take(window).enumerate() {
        if forbidden.contains(doc_id.as_str()) {
            return Verdict::fail(format!(
                "forbidden ID '{doc_id}' encountered at position {}",
                position + 1
            ));
        }

        remaining.remove(doc_id.as_str());
        if remaining.is_empty() {
            break;
        }
    }

    if remaining.is_empty() {
        Verdict::pass()
    } else {
        Verdict::fail(format!(
            "{} not found in the first {} search results",
            sorted_list(&remaining),
            window.min(result_ids.len())
        ))
    }
}

/// Compare the first N results against the expected IDs
///
/// N is the number of expected IDs. Strict cases compare element-for-element;
/// non-strict cases compare as unordered sets.
pub fn evaluate_precision(case: &PrecisionCase, result_ids: &[String]) -> Verdict {
    let n = case.expected_ids.len();
    let head = &result_ids[..result_ids.len().min(n)];

    let matches = if case.strict {
        head == case.expected_ids.as_slice()
    } else {
        let head_set: HashSet<&str> = head.iter().map(String::as_str).collect();
        let expected_set: HashSet<&str> = case.expected_ids.iter().map(String::as_str).collect();
        head_set == expected_set
    };

    if matches {
        Verdict::pass()
    } else {
        Verdict::fail(format!(
            "the expected IDs [{}] did not match the first {n} results [{}]",
            case.expected_ids.join(", "),
            head.join(", ")
        ))
    }
}

/// Check that observed before-IDs precede any observed after-IDs
///
/// Two independent failure modes, both surfaced rather than short-circuited
/// into one message: before-IDs never observed in the window, and ordering
/// violations collected along the way. After-IDs that never appear are not a
/// failure by themselves.
pub fn evaluate_order(case: &OrderCase, result_ids: &[String]) -> Verdict {
    let mut remaining_before: HashSet<&str> = case.before_ids.iter().map(String::as_str).collect();
    let mut remaining_after: HashSet<&str> = case.after_ids.iter().map(String::as_str).collect();
    let mut violations: Vec<(Vec<String>, String)> = Vec::new();

    for doc_id in result_ids.iter().take(ORDER_THRESHOLD_POSITION) {
        remaining_before.remove(doc_id.as_str());

        if !remaining_before.is_empty() && remaining_after.contains(doc_id.as_str()) {
            let snapshot: Vec<String> = {
                let mut ids: Vec<&str> = remaining_before.iter().copied().collect();
                ids.sort_unstable();
                ids.into_iter().map(String::from).collect()
            };
            violations.push((snapshot, doc_id.clone()));
        }

        remaining_after.remove(doc_id.as_str());

        if remaining_before.is_empty() && remaining_after.is_empty() {
            break;
        }
    }

    let mut failures = Vec::new();
    if !remaining_before.is_empty() {
        failures.push(format!(
            "{} not found in the search results",
            sorted_list(&remaining_before)
        ));
    }
    if !violations.is_empty() {
        failures.push("the following IDs were found in the wrong order:".to_string());
        for (remaining, after_id) in &violations {
            failures.push(format!("{after_id} appeared before {}", remaining.join(", ")));
        }
    }

    if failures.is_empty() {
        Verdict::pass()
    } else {
        Verdict::fail(failures.join("\n"))
    }
}

fn sorted_list(ids: &HashSet<&str>) -> String {
    let mut ids: Vec<&str> = ids.iter().copied().collect();
    ids.sort_unstable();
    format!("[{}]", ids.join(", "))
}
