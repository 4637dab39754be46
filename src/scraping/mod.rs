pub mod base;
pub mod conference_alert;

use tracing::warn;

use crate::models::Event;

pub trait ListingScraper: Send + Sync {
    fn source_id(&self) -> &'static str;
    fn source_name(&self) -> &'static str;
    fn fetch(&self, region: &str) -> anyhow::Result<Vec<Event>>;
}

fn active_scrapers() -> Vec<Box<dyn ListingScraper>> {
    vec![Box::new(conference_alert::ConferenceAlert)]
}

/// Runs every active scraper against the given region. Failures are logged
/// and dropped; callers always get whatever subset succeeded, possibly
/// nothing.
pub fn run_all(region: &str) -> Vec<Event> {
    collect_from(&active_scrapers(), region)
}

fn collect_from(scrapers: &[Box<dyn ListingScraper>], region: &str) -> Vec<Event> {
    let mut events = Vec::new();

    for scraper in scrapers {
        match scraper.fetch(region) {
            Ok(mut scraped) => events.append(&mut scraped),
            Err(err) => {
                warn!(
                    source = scraper.source_id(),
                    "scrape of {} failed: {err:#}",
                    scraper.source_name()
                );
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::models::{EventType, IndexingDb, PLACEHOLDER_LINK};

    struct FailingSource;

    impl ListingScraper for FailingSource {
        fn source_id(&self) -> &'static str {
            "down"
        }

        fn source_name(&self) -> &'static str {
            "Always Down Listings"
        }

        fn fetch(&self, _region: &str) -> anyhow::Result<Vec<Event>> {
            Err(anyhow!("connection refused"))
        }
    }

    struct FixedSource;

    impl ListingScraper for FixedSource {
        fn source_id(&self) -> &'static str {
            "fixed"
        }

        fn source_name(&self) -> &'static str {
            "Fixed Listings"
        }

        fn fetch(&self, region: &str) -> anyhow::Result<Vec<Event>> {
            Ok(vec![Event {
                id: "aca-4242".to_string(),
                title: "Intl Conference on X".to_string(),
                kind: EventType::Conference,
                location: format!("Chennai, {region}"),
                is_virtual: false,
                start_date: "2025-05-01".to_string(),
                submission_deadline: "Check Website".to_string(),
                price: 0,
                currency: "See Site".to_string(),
                indexing: vec![IndexingDb::Scopus],
                description: "A prestigious conference.".to_string(),
                link: PLACEHOLDER_LINK.to_string(),
            }])
        }
    }

    #[test]
    fn failing_source_contributes_nothing() {
        let scrapers: Vec<Box<dyn ListingScraper>> =
            vec![Box::new(FailingSource), Box::new(FixedSource)];
        let events = collect_from(&scrapers, "India");
        assert_eq!(events.len(), 1, "only the healthy source's records remain");
        assert_eq!(events[0].id, "aca-4242");
        assert_eq!(events[0].location, "Chennai, India");
    }

    #[test]
    fn all_sources_failing_yields_empty() {
        let scrapers: Vec<Box<dyn ListingScraper>> =
            vec![Box::new(FailingSource), Box::new(FailingSource)];
        assert!(collect_from(&scrapers, "India").is_empty());
    }
}
