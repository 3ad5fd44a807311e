//! Static fixture suites, one per content domain
//!
//! Cases are declared literally and validated at load time: any malformed
//! case aborts the run before a single query is issued.

use rankcheck_core::cases::TestCase;
use rankcheck_core::error::Result;

use crate::domain::ContentDomain;

pub mod images;
pub mod works;

/// The full suite for a content domain
pub fn suite(domain: ContentDomain) -> Result<Vec<TestCase>> {
    match domain {
        ContentDomain::Works => works::cases(),
        ContentDomain::Images => images::cases(),
    }
}
