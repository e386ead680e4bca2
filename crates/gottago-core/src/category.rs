//! Search categories and urgency levels.
//!
//! Both are closed sets. Parsing from a string identifier is fallible on
//! purpose: an unrecognized category is a caller bug, not something to paper
//! over with a default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The facility categories a user can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restrooms,
    Water,
    Food,
    Air,
    Accessibility,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Restrooms,
        Category::Water,
        Category::Food,
        Category::Air,
        Category::Accessibility,
    ];

    /// Stable string identifier, also the tab id used by frontends.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::Restrooms => "restrooms",
            Category::Water => "water",
            Category::Food => "food",
            Category::Air => "air",
            Category::Accessibility => "accessibility",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Restrooms => "Restrooms",
            Category::Water => "Water",
            Category::Food => "Free Food",
            Category::Air => "Free Air",
            Category::Accessibility => "Accessibility",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restrooms" => Ok(Category::Restrooms),
            "water" => Ok(Category::Water),
            "food" => Ok(Category::Food),
            "air" => Ok(Category::Air),
            "accessibility" => Ok(Category::Accessibility),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// How urgently the user needs the facility. Shapes the upstream query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    Relaxed,
    NearTerm,
    Emergency,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct UrgencyParseError(pub String);

impl Urgency {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Urgency::Relaxed => "relaxed",
            Urgency::NearTerm => "near-term",
            Urgency::Emergency => "emergency",
        }
    }
}

impl FromStr for Urgency {
    type Err = UrgencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relaxed" => Ok(Urgency::Relaxed),
            "near-term" => Ok(Urgency::NearTerm),
            "emergency" => Ok(Urgency::Emergency),
            other => Err(UrgencyParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = "parking".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError("parking".to_string()));
    }

    #[test]
    fn unknown_urgency_is_an_error() {
        assert!("whenever".parse::<Urgency>().is_err());
    }

    #[test]
    fn urgency_ids_round_trip() {
        for urgency in [Urgency::Relaxed, Urgency::NearTerm, Urgency::Emergency] {
            assert_eq!(urgency.id().parse::<Urgency>(), Ok(urgency));
        }
    }

    #[test]
    fn category_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Category::Accessibility).expect("serialize");
        assert_eq!(json, "\"accessibility\"");
    }
}
