//! Content domains
//!
//! Test fixtures are grouped by the kind of document they query: catalogue
//! works or images. Each domain maps to its own index and query template in
//! the configuration.

use std::fmt;
use std::str::FromStr;

/// A content domain with its own fixture suite, index, and query template
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentDomain {
    Works,
    Images,
}

impl ContentDomain {
    /// All domains, in reporting order
    pub fn all() -> [ContentDomain; 2] {
        [ContentDomain::Works, ContentDomain::Images]
    }

    /// The configuration key and display name for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentDomain::Works => "works",
            ContentDomain::Images => "images",
        }
    }
}

impl fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "works" => Ok(ContentDomain::Works),
            "images" => Ok(ContentDomain::Images),
            other => Err(format!(
                "unknown content domain '{other}', expected 'works' or 'images'"
            )),
        }
    }
}
