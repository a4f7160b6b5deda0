//! Audit event data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cf::models::parse_timestamp;
use crate::cf::Resource;

/// Audit event record
pub type Event = Resource<EventEntity>;

/// Audit event entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventEntity {
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor: String,
    #[serde(default)]
    pub actor_type: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    pub actee: String,
    #[serde(default)]
    pub actee_type: Option<String>,
    #[serde(default)]
    pub actee_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub organization_guid: Option<String>,
}

impl EventEntity {
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.timestamp.as_deref())
    }

    /// Short human description for well-known audit event types,
    /// falling back to the raw type
    pub fn description(&self) -> &str {
        match self.event_type.as_str() {
            "audit.app.create" => "Created app",
            "audit.app.delete-request" => "Requested deletion of app",
            "audit.app.restage" => "Restaged app",
            "audit.app.start" => "Started app",
            "audit.app.stop" => "Stopped app",
            "audit.app.update" => "Updated app",
            "audit.app.ssh-authorized" => "SSH access authorized",
            "audit.app.ssh-unauthorized" => "SSH access unauthorized",
            "app.crash" => "App crashed",
            "audit.space.create" => "Created space",
            "audit.space.delete-request" => "Requested deletion of space",
            "audit.space.update" => "Updated space",
            "audit.organization.create" => "Created organization",
            "audit.organization.update" => "Updated organization",
            "audit.service_instance.create" => "Created service instance",
            "audit.service_instance.delete" => "Deleted service instance",
            "audit.service_binding.create" => "Bound service",
            "audit.service_binding.delete" => "Unbound service",
            "audit.route.create" => "Created route",
            "audit.route.delete-request" => "Requested deletion of route",
            other => other,
        }
    }
}

/// Filter for event listings; each set field becomes a `q=` clause
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// GUID of the resource the event is about
    pub actee: Option<String>,
    pub event_type: Option<String>,
}

impl EventFilter {
    pub fn for_actee(guid: impl Into<String>) -> Self {
        Self {
            actee: Some(guid.into()),
            event_type: None,
        }
    }

    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Query string (without leading `?`), empty when no filter is set
    pub(crate) fn query(&self) -> String {
        let mut clauses = Vec::new();
        if let Some(actee) = &self.actee {
            clauses.push(format!("q=actee:{}", urlencoding::encode(actee)));
        }
        if let Some(event_type) = &self.event_type {
            clauses.push(format!("q=type:{}", urlencoding::encode(event_type)));
        }
        clauses.join("&")
    }
}
