//! Quota definition API operations

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{OrganizationQuota, QuotaFilter, SpaceQuota};

impl CfClient {
    /// Get all organization quota definitions, optionally filtered (with pagination)
    pub async fn quota_definitions(
        &self,
        filter: Option<&QuotaFilter>,
    ) -> Result<Vec<OrganizationQuota>> {
        let mut path = format!("{}/{}", api::V2, api::QUOTA_DEFINITIONS);
        if let Some(query) = filter.map(QuotaFilter::query).filter(|q| !q.is_empty()) {
            path.push('?');
            path.push_str(&query);
        }
        self.get_all(&path).await
    }

    /// Get an organization quota definition by GUID
    pub async fn organization_quota(&self, guid: &str) -> Result<OrganizationQuota> {
        let path = format!("{}/{}/{}", api::V2, api::QUOTA_DEFINITIONS, guid);
        self.get_json(&path).await
    }

    /// Get a space quota definition by GUID
    pub async fn space_quota(&self, guid: &str) -> Result<SpaceQuota> {
        let path = format!("{}/{}/{}", api::V2, api::SPACE_QUOTA_DEFINITIONS, guid);
        self.get_json(&path).await
    }
}
