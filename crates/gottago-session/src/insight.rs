//! Short explanatory lines describing how urgency and category shape the
//! search, shown alongside results.

use gottago_core::category::{Category, Urgency};

#[must_use]
pub fn urgency_insight(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Emergency => {
            "Emergency mode: prioritizing 24/7 locations and places currently open"
        }
        Urgency::NearTerm => "Near-term mode: focusing on closest options within walking distance",
        Urgency::Relaxed => "Browsing mode: showing best-rated options in your area",
    }
}

#[must_use]
pub fn category_insight(category: Category) -> &'static str {
    match category {
        Category::Restrooms => "Analyzing cleanliness, accessibility, and availability from reviews",
        Category::Water => "Identifying free refill stations and water fountain locations",
        Category::Food => "Finding community resources and mutual aid locations",
        Category::Air => "Locating free tire inflation and bike pump services",
        Category::Accessibility => "Evaluating wheelchair access, ramps, and ADA compliance",
    }
}
