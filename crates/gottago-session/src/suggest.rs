//! Suggested follow-up questions, shown before the first chat turn.

use gottago_core::category::Category;

/// Fixed per-category prompt suggestions.
#[must_use]
pub fn suggested_questions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Restrooms => &[
            "Which ones are open 24/7?",
            "Show me the cleanest options",
            "Which has wheelchair accessible facilities?",
            "Are any of these gender-neutral?",
        ],
        Category::Water => &[
            "Which places let me refill for free?",
            "Show me fountains in parks",
            "Which ones are filtered water?",
            "Any open right now?",
        ],
        Category::Food => &[
            "Which are open today?",
            "Tell me about hot meals",
            "Which serves vegetarian options?",
            "Any that don't require ID?",
        ],
        Category::Air => &[
            "Which are free vs paid?",
            "Show me 24-hour options",
            "Which has the best reviews?",
            "Any near gas stations?",
        ],
        Category::Accessibility => &[
            "Which has ramps and elevators?",
            "Show me places with accessible parking",
            "Which has braille signage?",
            "Any with accessible restrooms?",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_suggestions() {
        for category in Category::ALL {
            assert!(!suggested_questions(category).is_empty());
        }
    }
}
