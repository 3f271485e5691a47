use crate::models::{Item, SearchResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One displayable media record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub thumbnail_url: Option<String>,
    pub nasa_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photographer: Option<String>,
    pub secondary_creator: Option<String>,
    pub center: Option<String>,
    pub location: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub media_type: Option<String>,
    pub keywords: Vec<String>,
}

impl ResultItem {
    pub fn from_thumbnail_url(url: String) -> Self {
        Self {
            thumbnail_url: Some(url),
            ..Default::default()
        }
    }

    fn from_item(item: &Item) -> Self {
        let thumbnail_url = first_link_href(item);
        let Some(data) = item.data.first() else {
            tracing::debug!("Item without data record: {:?}", item.href);
            return Self {
                thumbnail_url,
                ..Default::default()
            };
        };
        Self {
            thumbnail_url,
            nasa_id: data.nasa_id.clone(),
            title: data.title.clone(),
            description: data.description.clone(),
            photographer: data.photographer.clone(),
            secondary_creator: data.secondary_creator.clone(),
            center: data.center.clone(),
            location: data.location.clone(),
            date_created: data.date_created.as_deref().and_then(parse_date_created),
            media_type: data.media_type.clone(),
            keywords: data.keywords.clone(),
        }
    }
}

/// How a response is turned into grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizeMode {
    /// Only the first link of each item; items without one are dropped.
    Links,
    /// Full metadata from the first data record and first link.
    #[default]
    Records,
}

fn first_link_href(item: &Item) -> Option<String> {
    item.links.first().and_then(|link| link.href.clone())
}

pub fn normalize_links(response: &SearchResponse) -> Vec<String> {
    response
        .collection
        .items
        .iter()
        .filter_map(first_link_href)
        .collect()
}

pub fn normalize_records(response: &SearchResponse) -> Vec<ResultItem> {
    response
        .collection
        .items
        .iter()
        .map(ResultItem::from_item)
        .collect()
}

pub fn normalize(response: &SearchResponse, mode: NormalizeMode) -> Vec<ResultItem> {
    match mode {
        NormalizeMode::Links => normalize_links(response)
            .into_iter()
            .map(ResultItem::from_thumbnail_url)
            .collect(),
        NormalizeMode::Records => normalize_records(response),
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
pub fn parse_date_created(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
