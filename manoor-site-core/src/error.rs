//! Unified error type definition

use thiserror::Error;

/// Site layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// An element the operation needs is absent from the page
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// The DOM refused a mutation
    #[error("DOM error: {0}")]
    Dom(String),
}

impl SiteError {
    /// Whether it is expected behavior (missing optional markup) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ElementNotFound(_) => true,
            Self::Config(_) | Self::Dom(_) => false,
        }
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Site layer Result type alias
pub type SiteResult<T> = std::result::Result<T, SiteError>;
