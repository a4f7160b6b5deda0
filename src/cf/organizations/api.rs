//! Organization API operations

use log::debug;
use reqwest::Method;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{DeleteOrganization, Organization, OrganizationRequest};

impl CfClient {
    /// Get all organizations visible to the token (with pagination)
    pub async fn organizations(&self) -> Result<Vec<Organization>> {
        let path = format!("{}/{}", api::V2, api::ORGANIZATIONS);
        self.get_all(&path).await
    }

    /// Get a single organization by GUID
    pub async fn organization(&self, guid: &str) -> Result<Organization> {
        let path = format!("{}/{}/{}", api::V2, api::ORGANIZATIONS, guid);
        self.get_json(&path).await
    }

    /// Create an organization
    pub async fn create_organization(&self, request: &OrganizationRequest) -> Result<Organization> {
        let path = format!("{}/{}", api::V2, api::ORGANIZATIONS);
        debug!("Creating organization '{}'", request.name);

        self.request_with_body(Method::POST, &path, request)
            .await?
            .json()
    }

    /// Delete an organization
    pub async fn delete_organization(&self, delete: &DeleteOrganization) -> Result<()> {
        let path = format!(
            "{}/{}/{}?{}",
            api::V2,
            api::ORGANIZATIONS,
            delete.guid,
            delete.query()
        );
        debug!("Deleting organization {}", delete.guid);

        self.request(Method::DELETE, &path).await?;
        Ok(())
    }
}
