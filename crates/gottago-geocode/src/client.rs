//! Forward-geocoding client for the Nominatim `/search` endpoint.

use std::time::Duration;

use gottago_core::place::Coordinates;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodedLocation, NominatimHit};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Client for turning a typed address into coordinates.
///
/// Nominatim's usage policy requires an identifying user agent, so one is
/// always set on the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.to_owned())
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| GeocodeError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Resolves free-form text to the single best coordinate match.
    ///
    /// Returns `Ok(None)` when the text is blank or the geocoder finds
    /// nothing.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or a non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeocodeError::InvalidCoordinate`] if a hit carries a
    ///   non-numeric coordinate.
    pub async fn search(&self, query: &str) -> Result<Option<GeocodedLocation>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let mut url = self
            .base_url
            .join("search")
            .map_err(|_| GeocodeError::InvalidBaseUrl(self.base_url.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let hits: Vec<NominatimHit> = serde_json::from_str(&response.text().await?)?;

        let Some(hit) = hits.into_iter().next() else {
            tracing::debug!(%query, "geocoder returned no hits");
            return Ok(None);
        };

        Ok(Some(GeocodedLocation {
            coordinates: Coordinates {
                latitude: parse_coordinate(&hit.lat)?,
                longitude: parse_coordinate(&hit.lon)?,
            },
            display_name: hit.display_name,
        }))
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.parse::<f64>()
        .map_err(|_| GeocodeError::InvalidCoordinate(raw.to_string()))
}
