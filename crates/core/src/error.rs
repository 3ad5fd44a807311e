use thiserror::Error;

/// Result type for rankcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rankcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Test case construction errors (empty or duplicate ID lists, overlapping sets)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query template errors (unparseable JSON, missing placeholder)
    #[error("Template error: {0}")]
    Template(String),

    /// Search backend errors (network failure, non-success status, bad response)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Creates a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a template error
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Creates a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Adds context to any error
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::with_context(context, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_the_source_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result.context("failed to read template").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert_eq!(err.to_string(), "failed to read template: no such file");
        assert!(std::error::Error::source(&err).is_some());
    }
}
