//! Plain-text rendering of place lists.

use gottago_core::place::Place;
use gottago_core::Category;

pub(crate) fn print_places(category: Category, places: &[Place]) {
    if places.is_empty() {
        println!("No {} found nearby.", category.label().to_lowercase());
        return;
    }

    println!("Found {} {} near you:", places.len(), category.label().to_lowercase());
    for (index, place) in places.iter().enumerate() {
        let mut line = format!("{:>2}. {} ({:.1})", index + 1, place.name, place.score);
        if let Some(distance) = &place.distance {
            line.push_str(&format!(" · {distance}"));
        }
        println!("{line}");
        println!("      {}", place.category_label);
        if !place.address.is_empty() {
            println!("      {}", place.address);
        }
        if !place.tags.is_empty() {
            println!("      {}", place.tags.join(" · "));
        }
    }
}
