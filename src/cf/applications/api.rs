//! Application API operations

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Application, ApplicationSummary};

impl CfClient {
    /// Get all applications of a space (with pagination)
    pub async fn applications(&self, space_guid: &str) -> Result<Vec<Application>> {
        let path = format!("{}/{}/{}/{}", api::V2, api::SPACES, space_guid, api::APPS);
        self.get_all(&path).await
    }

    /// Get a single application by GUID
    pub async fn application(&self, guid: &str) -> Result<Application> {
        let path = format!("{}/{}/{}", api::V2, api::APPS, guid);
        self.get_json(&path).await
    }

    /// Get the summary (routes, services, usage) of an application
    pub async fn application_summary(&self, guid: &str) -> Result<ApplicationSummary> {
        let path = format!("{}/{}/{}/summary", api::V2, api::APPS, guid);
        self.get_json(&path).await
    }
}
