//! Construction of the natural-language query sent to the upstream
//! conversational engine for a new search.

use crate::category::{Category, Urgency};

/// How many results the upstream engine is asked for.
pub const RESULT_LIMIT: usize = 6;

/// The fixed intent phrase describing what each category is really asking
/// the engine to find.
#[must_use]
pub fn intent_phrase(category: Category) -> &'static str {
    match category {
        Category::Restrooms => {
            "places where the public can use a restroom (parks, cafes, libraries, large stores)"
        }
        Category::Water => {
            "places with water fountains or bottle refill stations (parks, gyms, cafes)"
        }
        Category::Food => "free food resources (community fridges, food pantries, soup kitchens)",
        Category::Air => {
            "places that offer free air for tires (gas stations, service centers, tire shops)"
        }
        Category::Accessibility => "places with wheelchair accessibility and accessible restrooms",
    }
}

/// Builds the search instruction for a new (non-follow-up) query.
///
/// Pure function of its inputs: the same `(category, urgency)` pair always
/// produces the same string. Emergency asks for 24/7 or currently-open
/// places, near-term asks for closest-first, relaxed adds nothing.
#[must_use]
pub fn build_search_query(category: Category, urgency: Urgency) -> String {
    let mut query = format!(
        "Find {RESULT_LIMIT} nearby Yelp-listed places for: {intent}.\n\
         Use the user's coordinates. Prefer closest + highly rated.\n\
         Return Yelp business results (not general advice).\n",
        intent = intent_phrase(category),
    );

    match urgency {
        Urgency::Emergency => {
            query.push_str("Prefer places that are open 24/7 or currently open.\n");
        }
        Urgency::NearTerm => {
            query.push_str("Prefer the closest options first.\n");
        }
        Urgency::Relaxed => {}
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_query_contains_its_intent_phrase() {
        for category in Category::ALL {
            let query = build_search_query(category, Urgency::Relaxed);
            assert!(
                query.contains(intent_phrase(category)),
                "query for {category} should contain its intent phrase"
            );
            assert!(!query.is_empty());
        }
    }

    #[test]
    fn emergency_adds_open_now_clause() {
        let query = build_search_query(Category::Restrooms, Urgency::Emergency);
        assert!(query.contains("open 24/7 or currently open"));
    }

    #[test]
    fn near_term_adds_closest_first_clause() {
        let query = build_search_query(Category::Water, Urgency::NearTerm);
        assert!(query.contains("closest options first"));
    }

    #[test]
    fn relaxed_adds_no_modifier() {
        let relaxed = build_search_query(Category::Air, Urgency::Relaxed);
        assert!(!relaxed.contains("open 24/7"));
        assert!(!relaxed.contains("closest options first"));
    }

    #[test]
    fn query_is_deterministic() {
        let a = build_search_query(Category::Food, Urgency::Emergency);
        let b = build_search_query(Category::Food, Urgency::Emergency);
        assert_eq!(a, b);
    }

    #[test]
    fn query_requests_bounded_result_count() {
        let query = build_search_query(Category::Restrooms, Urgency::Relaxed);
        assert!(query.contains(&format!("Find {RESULT_LIMIT} nearby")));
    }
}
