use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::ElementRef;

// The listings sites block obvious bot agents, so the client identifies as a
// desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn clean_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

pub fn inner_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

pub fn fetch_html(url: &str) -> Result<String> {
    static CLIENT: Lazy<Client> = Lazy::new(|| {
        Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .expect("http client")
    });

    let response = CLIENT
        .get(url)
        .send()
        .with_context(|| format!("request failed for {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("non-success status for {url}"))?;
    response
        .text()
        .with_context(|| format!("unable to read response body for {url}"))
}
