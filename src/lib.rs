pub mod models;
pub mod scraping;
pub mod server;
pub mod simulate;

use rand::seq::SliceRandom;
use rand::Rng;

use models::Event;

/// Region whose listing page gets scraped on every request.
pub const DEFAULT_REGION: &str = "India";

/// Pads the scraped listings with the two simulated batches and shuffles the
/// combined list so the fabricated records do not cluster at the tail.
pub fn assemble_events(mut scraped: Vec<Event>, rng: &mut impl Rng) -> Vec<Event> {
    scraped.extend(simulate::conference::generate(rng));
    scraped.extend(simulate::hackathon::generate(rng));
    scraped.shuffle(rng);
    scraped
}
