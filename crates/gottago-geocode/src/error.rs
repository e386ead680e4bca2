use thiserror::Error;

/// Errors returned by the forward-geocoding client.
///
/// Geocoding failures are local and non-fatal: callers surface them as a
/// status message on the location control, never as an escalated failure.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure, or a non-2xx status from the geocoder.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized.
    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The geocoder returned a coordinate that does not parse as a number.
    #[error("invalid coordinate in geocoder response: {0}")]
    InvalidCoordinate(String),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
