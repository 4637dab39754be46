use rand::seq::IndexedRandom;
use rand::Rng;

use super::loose_date;
use crate::models::{Event, EventType, IndexingDb, PLACEHOLDER_LINK};

const BATCH_SIZE: usize = 8;

const TOPICS: [&str; 6] = [
    "Artificial Intelligence",
    "Blockchain",
    "Cyber Security",
    "IoT",
    "Data Science",
    "Machine Learning",
];

const CITIES: [&str; 6] = [
    "Bengaluru",
    "Hyderabad",
    "Mumbai",
    "Delhi",
    "Pune",
    "Chennai",
];

const PRICES: [u32; 4] = [5000, 8000, 12000, 4500];

const DATABASES: [IndexingDb; 4] = [
    IndexingDb::Ieee,
    IndexingDb::Scopus,
    IndexingDb::WoS,
    IndexingDb::Springer,
];

/// Fabricates the eight "search result" conferences that pad out every
/// response. No I/O; all variation comes from the caller's rng.
pub fn generate(rng: &mut impl Rng) -> Vec<Event> {
    (0..BATCH_SIZE)
        .map(|i| {
            let topic = *TOPICS.choose(rng).expect("topic list is non-empty");
            let city = *CITIES.choose(rng).expect("city list is non-empty");
            let is_virtual = rng.random_bool(0.3);
            let sample_size = rng.random_range(1..=3);
            let indexing: Vec<IndexingDb> = DATABASES
                .choose_multiple(rng, sample_size)
                .copied()
                .collect();

            Event {
                id: format!("google-{i}"),
                title: format!("International Conference on {topic} and Applications 2025"),
                kind: EventType::Conference,
                location: if is_virtual {
                    "Virtual".to_string()
                } else {
                    format!("{city}, India")
                },
                is_virtual,
                start_date: loose_date(rng, 1..=9, 10..=28),
                submission_deadline: loose_date(rng, 1..=5, 10..=28),
                price: *PRICES.choose(rng).expect("price list is non-empty"),
                currency: "₹".to_string(),
                indexing,
                description: format!(
                    "Indexed in premier databases. Join us for the leading {topic} conference."
                ),
                link: PLACEHOLDER_LINK.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn produces_eight_conferences() {
        let mut rng = StdRng::seed_from_u64(5);
        let events = generate(&mut rng);
        assert_eq!(events.len(), 8);

        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.id, format!("google-{i}"));
            assert_eq!(event.kind, EventType::Conference);
            assert!(PRICES.contains(&event.price));
            assert_eq!(event.currency, "₹");
            assert_eq!(event.link, "#");
            assert!(event.title.starts_with("International Conference on "));
            assert!(event.title.ends_with(" and Applications 2025"));
        }
    }

    #[test]
    fn location_matches_virtual_flag() {
        let mut rng = StdRng::seed_from_u64(19);
        for event in generate(&mut rng) {
            if event.is_virtual {
                assert_eq!(event.location, "Virtual");
            } else {
                assert!(event.location.ends_with(", India"));
                let city = event.location.trim_end_matches(", India");
                assert!(CITIES.contains(&city));
            }
        }
    }

    #[test]
    fn indexing_is_small_distinct_subset() {
        let mut rng = StdRng::seed_from_u64(23);
        for event in generate(&mut rng) {
            assert!((1..=3).contains(&event.indexing.len()));
            for (pos, db) in event.indexing.iter().enumerate() {
                assert!(DATABASES.contains(db));
                assert!(
                    !event.indexing[pos + 1..].contains(db),
                    "duplicate database in {:?}",
                    event.indexing
                );
            }
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let first = generate(&mut StdRng::seed_from_u64(77));
        let second = generate(&mut StdRng::seed_from_u64(77));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.title, b.title);
            assert_eq!(a.location, b.location);
            assert_eq!(a.start_date, b.start_date);
            assert_eq!(a.price, b.price);
            assert_eq!(a.indexing, b.indexing);
        }
    }
}
