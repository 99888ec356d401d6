//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating the audit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is empty.
    #[error("Missing required setting: {name}")]
    MissingValue { name: &'static str },

    /// The API base URL could not be parsed.
    #[error("Invalid API URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API base URL parsed but is not usable as an HTTP endpoint.
    #[error("Unsupported API URL scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },
}
