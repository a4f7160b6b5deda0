//! Wire shapes shared by every Cloud Controller resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paginated list wrapper returned by every v2 list endpoint
#[derive(Deserialize, Debug)]
pub struct ResourceEnvelope<T> {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Path of the next page, relative to the API endpoint
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<T>,
}

/// A `{metadata, entity}` record around any domain object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

/// Resource metadata
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Metadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Metadata {
    /// Parsed creation timestamp, if present and well-formed
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref())
    }

    /// Parsed last-update timestamp, if present and well-formed
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.updated_at.as_deref())
    }
}

pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Wrap an entity in a `{metadata, entity}` record
#[cfg(test)]
pub(crate) fn resource_json(guid: &str, entity: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "guid": guid,
            "created_at": "2016-06-08T16:41:33Z",
            "updated_at": "2016-06-08T16:41:26Z"
        },
        "entity": entity
    })
}

/// Wrap records in a list envelope
#[cfg(test)]
pub(crate) fn envelope_json(
    next_url: Option<&str>,
    resources: Vec<serde_json::Value>,
) -> serde_json::Value {
    serde_json::json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": next_url,
        "resources": resources
    })
}
