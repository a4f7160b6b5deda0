//! Application data models

use serde::{Deserialize, Serialize};

use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

/// Application record
pub type Application = Resource<ApplicationEntity>;

/// Application entity from the Cloud Controller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationEntity {
    pub name: String,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub stack_guid: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instances: Option<u32>,
    /// Memory per instance in megabytes
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub disk_quota: Option<u64>,
    #[serde(default)]
    pub buildpack: Option<String>,
    #[serde(default)]
    pub detected_buildpack: Option<String>,
    #[serde(default)]
    pub package_updated_at: Option<String>,
}

impl NamedEntity for ApplicationEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ApplicationEntity {
    pub fn is_started(&self) -> bool {
        self.state.as_deref() == Some("STARTED")
    }

    /// Buildpack set explicitly, falling back to the detected one
    pub fn effective_buildpack(&self) -> Option<&str> {
        self.buildpack
            .as_deref()
            .or(self.detected_buildpack.as_deref())
    }
}

/// Response of `GET /v2/apps/:guid/summary` (a bare object, not a record)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationSummary {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub running_instances: Option<u32>,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub disk_quota: Option<u64>,
    #[serde(default)]
    pub stack_guid: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteSummary>,
    #[serde(default)]
    pub services: Vec<ServiceSummary>,
}

/// Route bound to an application
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub guid: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub domain: DomainSummary,
}

impl RouteSummary {
    /// `host.domain/path`, omitting the empty parts
    pub fn url(&self) -> String {
        let host = if self.host.is_empty() {
            self.domain.name.clone()
        } else {
            format!("{}.{}", self.host, self.domain.name)
        };
        format!("{}{}", host, self.path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DomainSummary {
    pub guid: String,
    pub name: String,
}

/// Service instance as listed in space and application summaries
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub guid: String,
    pub name: String,
    #[serde(default)]
    pub bound_app_count: Option<u32>,
}
