//! Audit event API operations

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Event, EventFilter};

impl CfClient {
    /// Get audit events, optionally filtered (with pagination)
    pub async fn events(&self, filter: Option<&EventFilter>) -> Result<Vec<Event>> {
        let mut path = format!("{}/{}", api::V2, api::EVENTS);
        if let Some(query) = filter.map(EventFilter::query).filter(|q| !q.is_empty()) {
            path.push('?');
            path.push_str(&query);
        }
        self.get_all(&path).await
    }

    /// Get every audit event recorded against an application
    pub async fn application_events(&self, application_guid: &str) -> Result<Vec<Event>> {
        self.events(Some(&EventFilter::for_actee(application_guid)))
            .await
    }
}
