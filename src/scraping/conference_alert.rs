use anyhow::Result;
use once_cell::sync::Lazy;
use rand::Rng;
use scraper::{Html, Selector};

use super::base;
use super::ListingScraper;
use crate::models::{Event, EventType, IndexingDb, PLACEHOLDER_LINK};

const HOST: &str = "https://www.allconferencealert.net";
const SOURCE_ID: &str = "aca";
const SOURCE_NAME: &str = "AllConferenceAlert";

static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("cell selector"));

/// Scrapes the per-region listing pages of allconferencealert.net.
///
/// The site has no API, so this leans on its index pages happening to use a
/// table layout with date/title/location in the first three columns. Rows
/// that do not match that shape are skipped without error.
pub struct ConferenceAlert;

impl ListingScraper for ConferenceAlert {
    fn source_id(&self) -> &'static str {
        SOURCE_ID
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn fetch(&self, region: &str) -> Result<Vec<Event>> {
        let url = format!("{HOST}/{}.html", region.to_lowercase());
        let html = base::fetch_html(&url)?;
        Ok(self.parse_document(&html, &mut rand::rng()))
    }
}

impl ConferenceAlert {
    pub(crate) fn parse_document(&self, html: &str, rng: &mut impl Rng) -> Vec<Event> {
        let document = Html::parse_document(html);
        let mut events = Vec::new();

        for row in document.select(&ROW_SELECTOR) {
            let cells: Vec<String> = row.select(&CELL_SELECTOR).map(base::inner_text).collect();
            if cells.len() < 4 {
                continue;
            }

            let date_text = &cells[0];
            let title = &cells[1];
            let location = &cells[2];

            if !(title.contains("Conference") || title.contains("IC")) {
                continue;
            }

            events.push(Event {
                id: format!("aca-{}", rng.random_range(1000..=9999)),
                title: title.clone(),
                kind: EventType::Conference,
                location: location.clone(),
                is_virtual: location.contains("Virtual") || location.contains("Online"),
                start_date: date_text.clone(),
                submission_deadline: "Check Website".to_string(),
                // the index pages never list fees
                price: 0,
                currency: "See Site".to_string(),
                indexing: if title.contains("IEEE") {
                    vec![IndexingDb::Scopus, IndexingDb::Ieee]
                } else {
                    vec![IndexingDb::Scopus]
                },
                description: format!(
                    "A prestigious conference found on AllConferenceAlert in {location}."
                ),
                link: PLACEHOLDER_LINK.to_string(),
            });
        }

        events
    }
}
