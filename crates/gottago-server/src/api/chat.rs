//! The credential-holding proxy route for the upstream chat engine.
//!
//! The gateway validates the client-shaped body, shapes it into the
//! upstream envelope, and relays the upstream's status and body verbatim.
//! It holds no conversation state: session continuity is entirely
//! client-threaded via `chat_id`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::Value;

use gottago_yelp::types::{ChatRequest, UserContext};

use super::AppState;
use crate::middleware::RequestId;

pub async fn proxy_chat(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> Response {
    // A follow-up is recognized by a non-empty chat_id; it takes precedence
    // over any user_context the client also sent.
    let Some(query) = body
        .get("query")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty())
    else {
        tracing::debug!(request_id = %request_id.0, "rejecting request with missing or invalid query");
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Missing or invalid `query`" })),
        )
            .into_response();
    };

    let chat_id = body
        .get("chat_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty());

    let request = if let Some(chat_id) = chat_id {
        ChatRequest::follow_up(query, chat_id)
    } else {
        let user_context = body.get("user_context");
        let latitude = field_as_f64(user_context, "latitude");
        let longitude = field_as_f64(user_context, "longitude");
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            tracing::debug!(request_id = %request_id.0, "rejecting new search without numeric coordinates");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Missing user_context.latitude/longitude for new search",
                    "got": user_context.cloned().unwrap_or(Value::Null),
                })),
            )
                .into_response();
        };

        let locale = user_context
            .and_then(|context| context.get("locale"))
            .and_then(Value::as_str)
            .unwrap_or("en_US");

        ChatRequest::new_search(
            query,
            UserContext {
                locale: locale.to_string(),
                latitude,
                longitude,
            },
        )
    };

    // Config problem, not an upstream failure: the caller must be able to
    // tell them apart.
    let Some(yelp) = &state.yelp else {
        tracing::error!(request_id = %request_id.0, "YELP_API_KEY is not configured; refusing proxy request");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Missing YELP_API_KEY in environment (server isn't reading env vars)",
            })),
        )
            .into_response();
    };

    match yelp.chat_raw(&request).await {
        Ok(outcome) if outcome.is_success() => {
            (StatusCode::OK, Json(outcome.body)).into_response()
        }
        Ok(outcome) => {
            tracing::warn!(request_id = %request_id.0, status = outcome.status.as_u16(), "upstream chat error");
            let status = StatusCode::from_u16(outcome.status.as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Json(serde_json::json!({
                    "error": "Yelp API error",
                    "status": outcome.status.as_u16(),
                    "details": outcome.body,
                })),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(request_id = %request_id.0, error = %err, "upstream call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Server error",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

fn field_as_f64(context: Option<&Value>, field: &str) -> Option<f64> {
    context?.get(field)?.as_f64()
}
