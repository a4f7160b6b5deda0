//! Space data models

use serde::{Deserialize, Serialize};

use crate::cf::applications::ServiceSummary;
use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

/// Space record
pub type Space = Resource<SpaceEntity>;

/// Space entity from the Cloud Controller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpaceEntity {
    pub name: String,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub space_quota_definition_guid: Option<String>,
    #[serde(default)]
    pub allow_ssh: Option<bool>,
}

impl NamedEntity for SpaceEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Response of `GET /v2/spaces/:guid/summary` (a bare object, not a record)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpaceSummary {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub apps: Vec<SpaceSummaryApplication>,
    #[serde(default)]
    pub services: Vec<ServiceSummary>,
}

/// Application as listed in a space summary
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpaceSummaryApplication {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub running_instances: Option<u32>,
    #[serde(default)]
    pub instances: Option<u32>,
    /// Memory per instance in megabytes
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub disk_quota: Option<u64>,
    #[serde(default)]
    pub urls: Vec<String>,
}

impl SpaceSummary {
    /// Total memory reserved by started applications, in megabytes
    pub fn running_memory(&self) -> u64 {
        self.apps
            .iter()
            .filter(|app| app.state.as_deref() == Some("STARTED"))
            .map(|app| app.memory.unwrap_or(0) * u64::from(app.instances.unwrap_or(0)))
            .sum()
    }
}
