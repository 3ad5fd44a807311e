//! Configuration for the rankcheck harness
//!
//! Configuration is loaded from a TOML file. The backend password is never
//! stored in the file; it is read from the `RANKCHECK_PASSWORD` environment
//! variable when basic auth is configured.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ResultExt};

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_window() -> usize {
    10_000
}

fn default_tiebreak_field() -> String {
    // _doc order is deterministic for a fixed index state, which is all the
    // stable tie-break needs; override with a document key field when the
    // index has one.
    "_doc".to_string()
}

/// Search backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the search backend, e.g. "https://search.example.org:9200"
    pub url: String,

    /// Basic auth username; the password comes from `RANKCHECK_PASSWORD`
    #[serde(default)]
    pub username: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Resolve basic auth credentials, if configured
    ///
    /// A configured username without a password in the environment is a
    /// configuration error rather than a silent unauthenticated request.
    pub fn credentials(&self) -> Result<Option<(String, String)>> {
        match &self.username {
            None => Ok(None),
            Some(username) => {
                let password = std::env::var("RANKCHECK_PASSWORD").map_err(|_| {
                    Error::config(
                        "backend.username is set but RANKCHECK_PASSWORD is not in the environment",
                    )
                })?;
                Ok(Some((username.clone(), password)))
            }
        }
    }
}

/// Result fetching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Upper bound on the number of results requested for any single case
    #[serde(default = "default_max_window")]
    pub max_window: usize,

    /// Secondary sort field used to break score ties deterministically
    #[serde(default = "default_tiebreak_field")]
    pub tiebreak_field: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_window: default_max_window(),
            tiebreak_field: default_tiebreak_field(),
        }
    }
}

/// Per-content-domain settings: which index to query and with what template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Index (or alias) name the domain's queries run against
    pub index: String,

    /// Inline query template JSON containing a `{{query}}` placeholder
    #[serde(default)]
    pub query_template: Option<String>,

    /// Path to a file holding the query template JSON
    #[serde(default)]
    pub query_template_path: Option<PathBuf>,
}

impl DomainConfig {
    /// Read the template source, whichever of the two fields supplies it
    pub fn template_source(&self) -> Result<String> {
        match (&self.query_template, &self.query_template_path) {
            (Some(_), Some(_)) => Err(Error::config(
                "set either query_template or query_template_path, not both",
            )),
            (Some(inline), None) => Ok(inline.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .context(format!("failed to read query template {}", path.display())),
            (None, None) => Err(Error::config(
                "domain has neither query_template nor query_template_path",
            )),
        }
    }
}

/// Top-level harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    /// Content domains keyed by name ("works", "images", ...)
    #[serde(default)]
    pub domains: BTreeMap<String, DomainConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.backend.url.is_empty() {
            return Err(Error::config("backend.url must not be empty"));
        }
        if self.fetch.max_window == 0 {
            return Err(Error::config("fetch.max_window must be positive"));
        }
        for (name, domain) in &self.domains {
            if domain.index.is_empty() {
                return Err(Error::config(format!("domains.{name}.index must not be empty")));
            }
            if domain.query_template.is_none() && domain.query_template_path.is_none() {
                return Err(Error::config(format!(
                    "domains.{name} needs query_template or query_template_path"
                )));
            }
        }
        Ok(())
    }

    /// Look up a content domain's settings
    pub fn domain(&self, name: &str) -> Result<&DomainConfig> {
        self.domains.get(name).ok_or_else(|| {
            Error::config(format!("no configuration for content domain '{name}'"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const EXAMPLE: &str = r#"
[backend]
url = "http://localhost:9200"
username = "rank"

[fetch]
max_window = 5000
tiebreak_field = "query.id"

[domains.works]
index = "works-indexed-2024-01-01"
query_template = '{ "match": { "title": "{{query}}" } }'

[domains.images]
index = "images-indexed-2024-01-01"
query_template = '{ "match": { "caption": "{{query}}" } }'
"#;

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        config.validate().unwrap();
        assert_eq!(config.backend.url, "http://localhost:9200");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.fetch.max_window, 5000);
        assert_eq!(config.fetch.tiebreak_field, "query.id");
        assert_eq!(config.domain("works").unwrap().index, "works-indexed-2024-01-01");
    }

    #[test]
    fn fetch_defaults_apply_when_section_missing() {
        let config: Config = toml::from_str(
            r#"
[backend]
url = "http://localhost:9200"
"#,
        )
        .unwrap();
        assert_eq!(config.fetch.max_window, 10_000);
        assert_eq!(config.fetch.tiebreak_field, "_doc");
    }

    #[test]
    fn unknown_domain_is_a_config_error() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        let err = config.domain("sounds").unwrap_err();
        assert!(err.to_string().contains("sounds"));
    }

    #[test]
    fn domain_without_template_fails_validation() {
        let config: Config = toml::from_str(
            r#"
[backend]
url = "http://localhost:9200"

[domains.works]
index = "works"
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("query_template"));
    }

    #[test]
    fn template_source_reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "match": {{ "title": "{{{{query}}}}" }} }}"#).unwrap();
        let domain = DomainConfig {
            index: "works".to_string(),
            query_template: None,
            query_template_path: Some(file.path().to_path_buf()),
        };
        let source = domain.template_source().unwrap();
        assert!(source.contains("{{query}}"));
    }

    #[test]
    fn template_source_missing_file_carries_the_path() {
        let domain = DomainConfig {
            index: "works".to_string(),
            query_template: None,
            query_template_path: Some(PathBuf::from("/nonexistent/template.json")),
        };
        let err = domain.template_source().unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err
            .to_string()
            .contains("failed to read query template /nonexistent/template.json"));
    }

    #[test]
    fn template_source_rejects_both_fields() {
        let domain = DomainConfig {
            index: "works".to_string(),
            query_template: Some("{}".to_string()),
            query_template_path: Some(PathBuf::from("/tmp/template.json")),
        };
        assert!(domain.template_source().is_err());
    }
}
