//! Conversation session state.
//!
//! One `SearchSession` holds everything a multi-turn exchange needs: the
//! reference point, the search radius, the upstream session identifier, the
//! per-category result cache, and the transcript. All the scattered ambient
//! state of a UI lives here as one explicit object, and the cache
//! invalidation barrier is a single transition instead of call-site cleanup.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use gottago_core::category::Category;
use gottago_core::distance::{format_miles, haversine_miles};
use gottago_core::place::{Place, ReferencePoint};
use gottago_yelp::types::UserContext;
use gottago_yelp::{places_from_response, ChatRequest, ChatResponse};

use crate::reply::contextual_reply;

pub const DEFAULT_RADIUS_KM: u32 = 3;

/// Upstream conversation continuity.
///
/// `Uninitiated` sends the reference point; the first response carrying a
/// session identifier moves to `Active`, after which every send threads the
/// identifier instead. There is no automatic expiry: the upstream rejects a
/// stale identifier at its own discretion and that surfaces as an ordinary
/// gateway failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatState {
    Uninitiated,
    Active { chat_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. The transcript is append-only and never reordered.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A new search was attempted before any reference point was set.
    #[error("no reference point set; a new search needs coordinates")]
    NoReferencePoint,
}

/// Session-lifetime state for one user's search and chat exchange.
#[derive(Debug)]
pub struct SearchSession {
    reference_point: Option<ReferencePoint>,
    radius_km: u32,
    chat: ChatState,
    cache: HashMap<Category, Vec<Place>>,
    transcript: Vec<ChatMessage>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference_point: None,
            radius_km: DEFAULT_RADIUS_KM,
            chat: ChatState::Uninitiated,
            cache: HashMap::new(),
            transcript: Vec::new(),
        }
    }

    #[must_use]
    pub fn reference_point(&self) -> Option<&ReferencePoint> {
        self.reference_point.as_ref()
    }

    #[must_use]
    pub fn radius_km(&self) -> u32 {
        self.radius_km
    }

    #[must_use]
    pub fn chat_id(&self) -> Option<&str> {
        match &self.chat {
            ChatState::Active { chat_id } => Some(chat_id),
            ChatState::Uninitiated => None,
        }
    }

    /// Moves the search center. This is the invalidation barrier: every
    /// cached category list is dropped and the conversation returns to
    /// `Uninitiated` before this returns, so no response produced under the
    /// old reference point can populate state under the new one.
    pub fn set_reference_point(&mut self, point: ReferencePoint) {
        tracing::debug!(label = %point.label, "reference point changed; invalidating session");
        self.reference_point = Some(point);
        self.invalidate();
    }

    /// Changes the search radius. A changed value is the same barrier as a
    /// reference-point move; re-setting the current value is a no-op.
    pub fn set_radius_km(&mut self, radius_km: u32) {
        if radius_km == self.radius_km {
            return;
        }
        self.radius_km = radius_km;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        self.chat = ChatState::Uninitiated;
    }

    /// Builds the next upstream request.
    ///
    /// `Active` threads the session identifier and omits the reference
    /// point, per the upstream contract. `Uninitiated` sends the reference
    /// point as `user_context`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoReferencePoint`] for a new search with no
    /// reference point set.
    pub fn request(&self, query: impl Into<String>) -> Result<ChatRequest, SessionError> {
        match &self.chat {
            ChatState::Active { chat_id } => Ok(ChatRequest::follow_up(query, chat_id.clone())),
            ChatState::Uninitiated => {
                let point = self
                    .reference_point
                    .as_ref()
                    .ok_or(SessionError::NoReferencePoint)?;
                Ok(ChatRequest::new_search(query, UserContext::from(point)))
            }
        }
    }

    /// Folds one upstream response into the session: records a returned
    /// session identifier, normalizes the places, annotates distance from
    /// the reference point, and overwrites the category's cache slot. The
    /// slot holds exactly one generation; there is no versioning.
    pub fn absorb(&mut self, category: Category, response: &ChatResponse) -> &[Place] {
        if let Some(chat_id) = &response.chat_id {
            self.chat = ChatState::Active {
                chat_id: chat_id.clone(),
            };
        }

        let mut places = places_from_response(response);
        if let Some(point) = &self.reference_point {
            for place in &mut places {
                if let Some(coordinates) = place.coordinates {
                    place.distance = Some(format_miles(haversine_miles(
                        point.coordinates,
                        coordinates,
                    )));
                }
            }
        }

        self.cache.insert(category, places);
        self.places(category)
    }

    /// The most recent normalized list for a category; empty when the
    /// category has not been searched since the last barrier.
    #[must_use]
    pub fn places(&self, category: Category) -> &[Place] {
        self.cache.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Runs a full conversational turn: appends the user message, folds in
    /// the response, generates the local contextual reply against the
    /// refreshed list, and appends that reply to the transcript.
    pub fn complete_turn(
        &mut self,
        category: Category,
        message: &str,
        response: &ChatResponse,
    ) -> String {
        self.push_user(message);
        self.absorb(category, response);
        let reply = contextual_reply(message, self.places(category));
        self.push_assistant(reply.clone());
        reply
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.transcript.push(ChatMessage {
            role,
            content,
            sent_at: Utc::now(),
        });
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gottago_core::place::Coordinates;

    fn point() -> ReferencePoint {
        ReferencePoint::new(40.7128, -74.006, "City Hall")
    }

    fn response_with(chat_id: Option<&str>, businesses: serde_json::Value) -> ChatResponse {
        let mut body = serde_json::json!({
            "entities": [{ "businesses": businesses }]
        });
        if let Some(id) = chat_id {
            body["chat_id"] = serde_json::json!(id);
        }
        serde_json::from_value(body).expect("test response should deserialize")
    }

    #[test]
    fn new_search_requires_a_reference_point() {
        let session = SearchSession::new();
        assert_eq!(
            session.request("find restrooms").unwrap_err(),
            SessionError::NoReferencePoint
        );
    }

    #[test]
    fn first_response_with_chat_id_activates_the_session() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());

        let request = session.request("find restrooms").expect("request");
        assert!(request.user_context.is_some());
        assert!(request.chat_id.is_none());

        session.absorb(
            Category::Restrooms,
            &response_with(Some("conv-1"), serde_json::json!([])),
        );
        assert_eq!(session.chat_id(), Some("conv-1"));

        // Second send threads the identifier and omits the reference point.
        let follow_up = session.request("which is closest?").expect("request");
        assert_eq!(follow_up.chat_id.as_deref(), Some("conv-1"));
        assert!(follow_up.user_context.is_none());
    }

    #[test]
    fn response_without_chat_id_leaves_state_uninitiated() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(Category::Water, &response_with(None, serde_json::json!([])));
        assert_eq!(session.chat_id(), None);
    }

    #[test]
    fn reference_point_change_clears_cache_and_resets_chat() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(
            Category::Restrooms,
            &response_with(
                Some("conv-1"),
                serde_json::json!([{ "id": "a", "name": "Cafe" }]),
            ),
        );
        assert_eq!(session.places(Category::Restrooms).len(), 1);

        session.set_reference_point(ReferencePoint::new(34.05, -118.24, "Los Angeles"));
        assert!(session.places(Category::Restrooms).is_empty());
        assert_eq!(session.chat_id(), None);
    }

    #[test]
    fn radius_change_is_a_barrier_but_same_value_is_not() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(
            Category::Air,
            &response_with(
                Some("conv-1"),
                serde_json::json!([{ "id": "a", "name": "Shell" }]),
            ),
        );

        session.set_radius_km(session.radius_km());
        assert_eq!(session.chat_id(), Some("conv-1"));
        assert_eq!(session.places(Category::Air).len(), 1);

        session.set_radius_km(10);
        assert_eq!(session.chat_id(), None);
        assert!(session.places(Category::Air).is_empty());
    }

    #[test]
    fn absorb_overwrites_the_category_slot() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(
            Category::Food,
            &response_with(
                None,
                serde_json::json!([
                    { "id": "a", "name": "First Fridge" },
                    { "id": "b", "name": "Pantry" }
                ]),
            ),
        );
        session.absorb(
            Category::Food,
            &response_with(None, serde_json::json!([{ "id": "c", "name": "Kitchen" }])),
        );

        let places = session.places(Category::Food);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Kitchen");
    }

    #[test]
    fn absorb_fills_distance_from_the_reference_point() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(
            Category::Restrooms,
            &response_with(
                None,
                serde_json::json!([
                    { "id": "a", "name": "Near", "coordinates": { "latitude": 40.7128, "longitude": -74.006 } },
                    { "id": "b", "name": "No coords" }
                ]),
            ),
        );

        let places = session.places(Category::Restrooms);
        assert_eq!(places[0].distance.as_deref(), Some("0.0 mi"));
        assert!(places[1].distance.is_none());
    }

    #[test]
    fn caches_are_per_category() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        session.absorb(
            Category::Water,
            &response_with(None, serde_json::json!([{ "id": "a", "name": "Fountain" }])),
        );
        assert!(session.places(Category::Restrooms).is_empty());
        assert_eq!(session.places(Category::Water).len(), 1);
    }

    #[test]
    fn complete_turn_appends_user_then_assistant() {
        let mut session = SearchSession::new();
        session.set_reference_point(point());
        let reply = session.complete_turn(
            Category::Restrooms,
            "how many are there?",
            &response_with(
                Some("conv-1"),
                serde_json::json!([
                    { "id": "a", "name": "A" },
                    { "id": "b", "name": "B" }
                ]),
            ),
        );

        assert!(reply.contains('2'));
        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[0].content, "how many are there?");
        assert_eq!(transcript[1].role, Role::Assistant);
        assert_eq!(transcript[1].content, reply);
    }
}
