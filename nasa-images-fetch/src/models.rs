//! Response shape of the `/search` endpoint. Every field is optional since the
//! library does not guarantee any of them per item.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub collection: Collection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl SearchResponse {
    pub fn total_hits(&self) -> Option<u64> {
        self.collection.metadata.as_ref().and_then(|m| m.total_hits)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    pub total_hits: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Item {
    /// Asset manifest URL.
    pub href: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub data: Vec<ItemData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    pub href: Option<String>,
    pub rel: Option<String>,
    pub render: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemData {
    pub nasa_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photographer: Option<String>,
    pub secondary_creator: Option<String>,
    pub center: Option<String>,
    pub location: Option<String>,
    pub date_created: Option<String>,
    pub media_type: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}
