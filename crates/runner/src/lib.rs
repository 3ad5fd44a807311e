//! Test runner and reporting for the rankcheck harness
//!
//! Discovers fixture suites per content domain, drives the fetch/evaluate
//! pipeline for each selected case, and aggregates verdicts into a
//! deterministic report.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod domain;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use domain::ContentDomain;
pub use report::{CaseRecord, CaseStatus, Report, ReportCounts};
pub use runner::{RunOptions, Runner};
