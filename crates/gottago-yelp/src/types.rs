//! Yelp AI chat wire types.
//!
//! The request envelope follows the upstream contract: a new search carries
//! `user_context`, a follow-up carries the `chat_id` issued by the engine —
//! never both. The response bundles several entity kinds in one ordered
//! `entities` sequence; [`Entity`] models that as an untagged variant so the
//! business-bearing kind is picked out at the deserialization boundary
//! instead of by shape-sniffing untyped JSON.

use gottago_core::place::{Coordinates, ReferencePoint};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// One conversational turn sent alongside the query.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub role: String,
    pub content: String,
}

/// Geographic context for a new search.
#[derive(Debug, Clone, Serialize)]
pub struct UserContext {
    pub locale: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl UserContext {
    #[must_use]
    pub fn en_us(coordinates: Coordinates) -> Self {
        Self {
            locale: "en_US".to_string(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

impl From<&ReferencePoint> for UserContext {
    fn from(point: &ReferencePoint) -> Self {
        Self::en_us(point.coordinates)
    }
}

/// The request envelope for `POST /ai/chat/v2`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub messages: Vec<OutboundMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context: Option<UserContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl ChatRequest {
    /// A fresh search: geographic context, no session identifier.
    #[must_use]
    pub fn new_search(query: impl Into<String>, user_context: UserContext) -> Self {
        let query = query.into();
        Self {
            messages: vec![OutboundMessage {
                role: "user".to_string(),
                content: query.clone(),
            }],
            query,
            user_context: Some(user_context),
            chat_id: None,
        }
    }

    /// A follow-up turn continuing an existing upstream conversation.
    #[must_use]
    pub fn follow_up(query: impl Into<String>, chat_id: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            messages: vec![OutboundMessage {
                role: "user".to_string(),
                content: query.clone(),
            }],
            query,
            user_context: None,
            chat_id: Some(chat_id.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// Top-level response from the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Session identifier for follow-up continuity. Present on responses
    /// that opened or continued a conversation.
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Prose the engine attached, in whatever shape it chose.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl ChatResponse {
    /// The authoritative business list: the first business-bearing entity in
    /// document order. `None` when the response carries no such entity.
    #[must_use]
    pub fn business_entity(&self) -> Option<&BusinessEntity> {
        self.entities.iter().find_map(|entity| match entity {
            Entity::Businesses(e) => Some(e),
            Entity::Other(_) => None,
        })
    }
}

/// One element of the response's `entities` sequence.
///
/// Only the business-bearing kind is modeled; everything else is carried
/// as raw JSON so an unfamiliar entity never fails the whole response.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entity {
    Businesses(BusinessEntity),
    Other(serde_json::Value),
}

/// An entity carrying business listings.
///
/// Each listing is kept as raw JSON here and parsed individually by the
/// normalizer, so one malformed business is skipped rather than discarding
/// its siblings.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessEntity {
    pub businesses: Vec<serde_json::Value>,
}

/// A single business listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<BusinessCategory>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub attributes: BusinessAttributes,
    #[serde(default)]
    pub location: Option<BusinessLocation>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summaries: Option<Summaries>,
    #[serde(default)]
    pub contextual_info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessCategory {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessAttributes {
    #[serde(default, rename = "WheelchairAccessible")]
    pub wheelchair_accessible: Option<bool>,
    #[serde(default, rename = "GenderNeutralRestrooms")]
    pub gender_neutral_restrooms: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessLocation {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
}

/// Text blurbs at increasing length.
#[derive(Debug, Clone, Deserialize)]
pub struct Summaries {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_search_serializes_user_context_and_no_chat_id() {
        let request = ChatRequest::new_search(
            "find restrooms",
            UserContext::en_us(Coordinates {
                latitude: 40.7128,
                longitude: -74.006,
            }),
        );
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["query"], "find restrooms");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "find restrooms");
        assert_eq!(json["user_context"]["locale"], "en_US");
        assert!(json.get("chat_id").is_none());
    }

    #[test]
    fn follow_up_serializes_chat_id_and_no_user_context() {
        let request = ChatRequest::follow_up("which is closest?", "chat-123");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["chat_id"], "chat-123");
        assert!(json.get("user_context").is_none());
    }

    #[test]
    fn business_entity_picks_first_business_bearing_entity() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "chat_id": "abc",
            "entities": [
                { "kind": "text", "text": "here you go" },
                { "businesses": [{ "id": "b1", "name": "First" }] },
                { "businesses": [{ "id": "b2", "name": "Second" }] }
            ]
        }))
        .expect("deserialize");

        let entity = response.business_entity().expect("business entity");
        assert_eq!(entity.businesses.len(), 1);
        assert_eq!(entity.businesses[0]["id"], "b1");
    }

    #[test]
    fn response_without_businesses_has_no_business_entity() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "entities": [{ "kind": "text", "text": "no luck" }]
        }))
        .expect("deserialize");
        assert!(response.business_entity().is_none());
        assert!(response.chat_id.is_none());
    }
}
