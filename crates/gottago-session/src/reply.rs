//! Local contextual replies for chat follow-ups.
//!
//! After each turn the assistant reply is generated here, from the place
//! list that is already on screen. This is a prioritized rule table over
//! keyword matches, not an NLP component, and it never touches the network:
//! the upstream call already happened and refreshed the list.

use gottago_core::place::Place;

/// Ratings at or above this count as "clean" for the heuristic.
const CLEAN_SCORE_THRESHOLD: f64 = 4.5;

/// How many places the fallback summary enumerates.
const SUMMARY_LIMIT: usize = 5;

struct Rule {
    keywords: &'static [&'static str],
    respond: fn(&[Place]) -> String,
}

/// Evaluated top to bottom; the first rule whose keyword appears in the
/// lower-cased message wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["top", "best", "recommend"],
        respond: top_rated,
    },
    Rule {
        keywords: &["closest", "nearest"],
        respond: closest,
    },
    Rule {
        keywords: &["24/7", "always open"],
        respond: always_open,
    },
    Rule {
        keywords: &["wheelchair", "accessible", "ada"],
        respond: wheelchair_accessible,
    },
    Rule {
        keywords: &["clean"],
        respond: cleanest,
    },
    Rule {
        keywords: &["gender", "neutral"],
        respond: gender_neutral,
    },
    Rule {
        keywords: &["compare", "difference"],
        respond: compare,
    },
    Rule {
        keywords: &["how many", "count"],
        respond: count,
    },
];

/// Generates the assistant reply for a follow-up message against the
/// current place list.
#[must_use]
pub fn contextual_reply(message: &str, places: &[Place]) -> String {
    if places.is_empty() {
        return "I couldn't find any places matching that criteria. Try adjusting your search?"
            .to_string();
    }

    let lowered = message.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return (rule.respond)(places);
        }
    }

    summary(places)
}

// Rule bodies assume a non-empty list; contextual_reply guards it.
fn highest_rated(places: &[Place]) -> &Place {
    places
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .unwrap_or(&places[0])
}

fn top_rated(places: &[Place]) -> String {
    let best = highest_rated(places);
    format!(
        "I'd go with {}. It has the highest rating here at {:.1}.",
        best.name, best.score
    )
}

fn closest(places: &[Place]) -> String {
    // Results arrive proximity-sorted from the upstream engine, so the
    // first entry is the closest.
    let first = &places[0];
    match &first.distance {
        Some(distance) => format!(
            "{} should be the closest, about {} from you.",
            first.name, distance
        ),
        None => format!("{} should be the closest of these results.", first.name),
    }
}

fn always_open(places: &[Place]) -> String {
    let names = names_with_tag(places, "24/7");
    if names.is_empty() {
        "None of the current results advertise 24/7 access. An emergency search prioritizes places that are open right now.".to_string()
    } else {
        format!("These look to be open around the clock: {}.", names.join(", "))
    }
}

fn wheelchair_accessible(places: &[Place]) -> String {
    let names = names_with_tag(places, "accessible");
    if names.is_empty() {
        "None of the current results list wheelchair accessibility. Want me to search the accessibility category instead?".to_string()
    } else {
        format!("These list wheelchair access: {}.", names.join(", "))
    }
}

fn cleanest(places: &[Place]) -> String {
    let names: Vec<&str> = places
        .iter()
        .filter(|place| place.score >= CLEAN_SCORE_THRESHOLD)
        .map(|place| place.name.as_str())
        .collect();
    if names.is_empty() {
        format!(
            "Nothing here is rated {CLEAN_SCORE_THRESHOLD} or above, which is my bar for \"clean\". The highest-rated option is {}.",
            highest_rated(places).name
        )
    } else {
        format!("Going by ratings, the cleanest bets are {}.", names.join(", "))
    }
}

fn gender_neutral(places: &[Place]) -> String {
    let names = names_with_tag(places, "gender-neutral");
    if names.is_empty() {
        "None of the current results list gender-neutral restrooms.".to_string()
    } else {
        format!("These list gender-neutral restrooms: {}.", names.join(", "))
    }
}

fn compare(places: &[Place]) -> String {
    if places.len() < 2 {
        return format!(
            "There's only one result to compare right now: {}.",
            places[0].name
        );
    }

    let mut ranked: Vec<&Place> = places.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let (first, second) = (ranked[0], ranked[1]);
    format!(
        "{} is rated {:.1} while {} sits at {:.1}, so {} has the edge on rating.",
        first.name, first.score, second.name, second.score, first.name
    )
}

fn count(places: &[Place]) -> String {
    if places.len() == 1 {
        "There is 1 place in the current results.".to_string()
    } else {
        format!("There are {} places in the current results.", places.len())
    }
}

fn summary(places: &[Place]) -> String {
    let listed: Vec<String> = places
        .iter()
        .take(SUMMARY_LIMIT)
        .map(|place| {
            let mut entry = format!("{} ({:.1})", place.name, place.score);
            if let Some(distance) = &place.distance {
                entry.push_str(&format!(", {distance}"));
            }
            entry
        })
        .collect();

    let mut reply = format!("Here's what's nearby: {}.", listed.join("; "));
    if places.len() > SUMMARY_LIMIT {
        reply.push_str(&format!(
            " Plus {} more on the map.",
            places.len() - SUMMARY_LIMIT
        ));
    }
    reply
}

fn names_with_tag<'a>(places: &'a [Place], needle: &str) -> Vec<&'a str> {
    places
        .iter()
        .filter(|place| {
            place
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
        })
        .map(|place| place.name.as_str())
        .collect()
}
