//! Core types and evaluation engine for the rankcheck relevance harness
//!
//! This crate provides the foundational pieces used throughout rankcheck:
//!
//! - **Test cases**: validated Recall / Precision / Order assertions
//! - **Evaluators**: pure functions from (case, ranked IDs) to a verdict
//! - **Configuration**: backend, fetch, and per-domain settings
//! - **Error handling**: unified error types
//!
//! Nothing in this crate performs I/O against a search backend; the
//! evaluators consume pre-fetched, ordered ID windows.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod cases;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod verdict;

// Re-export main types for convenience
pub use cases::{
    CaseMeta, OrderCase, PrecisionCase, RecallCase, TestCase, DEFAULT_THRESHOLD_POSITION,
    ORDER_THRESHOLD_POSITION,
};
pub use config::{BackendConfig, Config, DomainConfig, FetchConfig};
pub use error::{Error, Result, ResultExt};
pub use evaluate::{evaluate, evaluate_order, evaluate_precision, evaluate_recall};
pub use verdict::{Outcome, Verdict};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
