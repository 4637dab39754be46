use rand::seq::IndexedRandom;
use rand::Rng;

use super::loose_date;
use crate::models::{Event, EventType, PLACEHOLDER_LINK};

const BATCH_SIZE: usize = 5;

const NAMES: [&str; 6] = [
    "HackOver",
    "CodeFest",
    "InnovateX",
    "BuildThon",
    "CyberHack",
    "AI Rush",
];

const EDITIONS: [&str; 3] = ["India Edition", "Global", "Online"];

/// Fabricates the five hackathon records. Venue alternates by index parity
/// rather than by random draw: even slots are online, odd slots in-person.
pub fn generate(rng: &mut impl Rng) -> Vec<Event> {
    (0..BATCH_SIZE)
        .map(|i| {
            let name = *NAMES.choose(rng).expect("name list is non-empty");
            let edition = *EDITIONS.choose(rng).expect("edition list is non-empty");
            let is_virtual = i % 2 == 0;

            Event {
                id: format!("hack-{i}"),
                title: format!("{name} 2025: {edition}"),
                kind: EventType::Hackathon,
                location: if is_virtual {
                    "Online".to_string()
                } else {
                    "Bengaluru, India".to_string()
                },
                is_virtual,
                start_date: loose_date(rng, 3..=6, 1..=30),
                submission_deadline: "Open Now".to_string(),
                price: 0,
                currency: String::new(),
                indexing: Vec::new(),
                description: "24-48 hour coding challenge with huge prizes.".to_string(),
                link: PLACEHOLDER_LINK.to_string(),
            }
        })
        .collect()
}
