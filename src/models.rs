use serde::{Deserialize, Serialize};

/// Every record links to "#"; the upstream index pages never expose a stable
/// per-event URL.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Conference,
    Hackathon,
}

/// Indexing databases a conference claims to be listed in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexingDb {
    #[serde(rename = "IEEE")]
    Ieee,
    Scopus,
    WoS,
    Springer,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String, // generator-prefixed, not globally unique
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub location: String,
    pub is_virtual: bool,
    pub start_date: String, // raw text, never a validated date
    pub submission_deadline: String,
    pub price: u32,
    pub currency: String,
    pub indexing: Vec<IndexingDb>,
    pub description: String,
    pub link: String,
}
