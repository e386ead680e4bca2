use thiserror::Error;

/// Errors returned by the Yelp AI chat client.
#[derive(Debug, Error)]
pub enum YelpError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status. The raw body is preserved
    /// for diagnostics even when it is not valid JSON.
    #[error("Yelp API error: status {status}")]
    Api {
        status: u16,
        details: serde_json::Value,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
