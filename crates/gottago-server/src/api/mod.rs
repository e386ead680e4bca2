mod chat;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use gottago_core::AppConfig;
use gottago_yelp::YelpClient;

use crate::middleware::request_id;

/// Shared state for the gateway: the loaded config plus the upstream client,
/// constructed once at startup when a credential is configured.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub yelp: Option<YelpClient>,
}

impl AppState {
    /// Builds the state, constructing the upstream client only when the
    /// credential is present. A missing credential is not a startup error;
    /// it surfaces through the health check and as a 500 on the proxy route.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// configured upstream base URL does not parse.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let yelp = match config.yelp_api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => Some(YelpClient::with_base_url(
                key,
                config.request_timeout_secs,
                &config.user_agent,
                &config.yelp_base_url,
            )?),
            None => None,
        };
        Ok(Self { config, yelp })
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    ok: bool,
    #[serde(rename = "hasKey")]
    has_key: bool,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/yelp-ai", post(chat::proxy_chat))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        ok: true,
        has_key: state.config.has_key(),
    })
}
