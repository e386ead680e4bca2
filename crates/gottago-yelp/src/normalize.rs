//! Normalization of upstream business listings into [`Place`] records.

use gottago_core::place::{OpenStatus, Place};

use crate::types::{Business, ChatResponse};

/// Converts one chat response into an ordered list of [`Place`] records.
///
/// The first business-bearing entity is authoritative; a response without
/// one yields an empty list, never an error. A malformed business is skipped
/// so its siblings survive.
///
/// Businesses without coordinates are kept: the list view stays complete and
/// the map collaborator skips pins it cannot plot.
#[must_use]
pub fn places_from_response(response: &ChatResponse) -> Vec<Place> {
    let Some(entity) = response.business_entity() else {
        return Vec::new();
    };

    entity
        .businesses
        .iter()
        .filter_map(|value| {
            serde_json::from_value::<Business>(value.clone())
                .map_err(|e| {
                    tracing::warn!(error = %e, "places_from_response: skipping malformed business");
                })
                .ok()
        })
        .map(|business| place_from_business(&business))
        .collect()
}

fn place_from_business(business: &Business) -> Place {
    let joined = business
        .categories
        .iter()
        .map(|c| c.title.as_str())
        .filter(|title| !title.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    let category_label = if joined.is_empty() {
        "Business".to_string()
    } else {
        joined
    };

    // Tag order is a rendering contract: price, then wheelchair access,
    // then gender-neutral restroom.
    let mut tags = Vec::new();
    if let Some(price) = business.price.as_deref().filter(|p| !p.is_empty()) {
        tags.push(format!("Price: {price}"));
    }
    if business.attributes.wheelchair_accessible == Some(true) {
        tags.push("Wheelchair accessible".to_string());
    }
    if business.attributes.gender_neutral_restrooms == Some(true) {
        tags.push("Gender-neutral restroom".to_string());
    }

    let address = business
        .location
        .as_ref()
        .and_then(|location| {
            location
                .formatted_address
                .clone()
                .or_else(|| location.address1.clone())
        })
        .unwrap_or_default();

    let summaries = business
        .summaries
        .as_ref()
        .map(|s| {
            [&s.short, &s.medium, &s.long]
                .into_iter()
                .filter_map(|blurb| blurb.clone())
                .collect()
        })
        .unwrap_or_default();

    let contextual_info = business
        .contextual_info
        .as_ref()
        .and_then(|value| value.as_str().map(ToOwned::to_owned));

    Place {
        id: business.id.clone(),
        name: business.name.clone(),
        category_label,
        score: business.rating.unwrap_or(0.0),
        tags,
        address,
        coordinates: business.coordinates,
        url: business.url.clone(),
        summaries,
        contextual_info,
        // No reliable open/closed signal in the response.
        open_status: OpenStatus::Unknown,
        distance: None,
    }
}
