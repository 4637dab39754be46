use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::models::Event;
use crate::{assemble_events, scraping, DEFAULT_REGION};

pub fn router() -> Router {
    Router::new()
        .route("/api/events", get(get_events))
        .layer(CorsLayer::permissive())
}

/// The single endpoint. Re-scrapes and re-generates on every call; there is
/// no cache and no pagination. Always responds 200 with a JSON array, even
/// when the scrape contributed nothing.
async fn get_events() -> Json<Vec<Event>> {
    let scraped = match tokio::task::spawn_blocking(|| scraping::run_all(DEFAULT_REGION)).await {
        Ok(events) => events,
        Err(err) => {
            error!("scrape task failed to run: {err}");
            Vec::new()
        }
    };

    Json(assemble_events(scraped, &mut rand::rng()))
}
