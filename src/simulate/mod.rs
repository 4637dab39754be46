pub mod conference;
pub mod hackathon;

use std::ops::RangeInclusive;

use rand::Rng;

/// Synthesizes the loose date strings the frontend expects. The hardcoded
/// year and the zero-padded single-digit month come from the original feed
/// format; the field is display text, never a parsed date.
fn loose_date(
    rng: &mut impl Rng,
    months: RangeInclusive<u32>,
    days: RangeInclusive<u32>,
) -> String {
    let month = rng.random_range(months);
    let day = rng.random_range(days);
    format!("2025-0{month}-{day}")
}
