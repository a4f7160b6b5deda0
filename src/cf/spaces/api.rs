//! Space API operations

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Space, SpaceSummary};

impl CfClient {
    /// Get all spaces of an organization (with pagination)
    pub async fn spaces(&self, organization_guid: &str) -> Result<Vec<Space>> {
        let path = format!(
            "{}/{}/{}/{}",
            api::V2,
            api::ORGANIZATIONS,
            organization_guid,
            api::SPACES
        );
        self.get_all(&path).await
    }

    /// Get a single space by GUID
    pub async fn space(&self, guid: &str) -> Result<Space> {
        let path = format!("{}/{}/{}", api::V2, api::SPACES, guid);
        self.get_json(&path).await
    }

    /// Get the summary (apps and services) of a space
    pub async fn space_summary(&self, guid: &str) -> Result<SpaceSummary> {
        let path = format!("{}/{}/{}/summary", api::V2, api::SPACES, guid);
        self.get_json(&path).await
    }

    /// Get the spaces a user belongs to within one organization (with pagination)
    pub async fn spaces_for_user_in_organization(
        &self,
        user_guid: &str,
        organization_guid: &str,
    ) -> Result<Vec<Space>> {
        let path = format!(
            "{}/{}/{}/{}?q=organization_guid:{}",
            api::V2,
            api::USERS,
            user_guid,
            api::SPACES,
            urlencoding::encode(organization_guid)
        );
        self.get_all(&path).await
    }
}
