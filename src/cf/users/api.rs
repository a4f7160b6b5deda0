//! User and role membership API operations

use log::debug;
use reqwest::Method;

use crate::cf::{CfClient, Organization, Space};
use crate::config::api;
use crate::error::Result;

use super::models::{OrganizationRole, SpaceRole, User, UserRoles, UserSummary};

impl CfClient {
    /// Register a UAA user with the Cloud Controller
    pub async fn create_user(&self, guid: &str) -> Result<User> {
        let path = format!("{}/{}", api::V2, api::USERS);
        debug!("Creating user {}", guid);

        self.request_with_body(Method::POST, &path, &serde_json::json!({ "guid": guid }))
            .await?
            .json()
    }

    /// Remove a user from the Cloud Controller
    pub async fn delete_user(&self, guid: &str) -> Result<()> {
        let path = format!("{}/{}/{}?async=false", api::V2, api::USERS, guid);
        debug!("Deleting user {}", guid);

        self.request(Method::DELETE, &path).await?;
        Ok(())
    }

    /// Get the organizations and spaces a user is associated with
    pub async fn user_summary(&self, guid: &str) -> Result<UserSummary> {
        let path = format!("{}/{}/{}/summary", api::V2, api::USERS, guid);
        self.get_json(&path).await
    }

    /// Get every user of an organization with their organization roles (with pagination)
    pub async fn users_for_organization(&self, organization_guid: &str) -> Result<Vec<UserRoles>> {
        let path = format!(
            "{}/{}/{}/user_roles",
            api::V2,
            api::ORGANIZATIONS,
            organization_guid
        );
        self.get_all(&path).await
    }

    /// Get every user of a space with their space roles (with pagination)
    pub async fn users_for_space(&self, space_guid: &str) -> Result<Vec<UserRoles>> {
        let path = format!("{}/{}/{}/user_roles", api::V2, api::SPACES, space_guid);
        self.get_all(&path).await
    }

    /// Add a user to an organization
    pub async fn assign_user_to_organization(
        &self,
        organization_guid: &str,
        user_guid: &str,
    ) -> Result<Organization> {
        let path = format!(
            "{}/{}/{}/{}/{}",
            api::V2,
            api::ORGANIZATIONS,
            organization_guid,
            api::USERS,
            user_guid
        );
        debug!(
            "Assigning user {} to organization {}",
            user_guid, organization_guid
        );

        self.request(Method::PUT, &path).await?.json()
    }

    /// Grant (`grant = true`) or revoke an organization role
    ///
    /// Returns the updated organization when granting and `None` when
    /// revoking. A revoke of a role the user never held is not distinguished.
    pub async fn set_organization_role(
        &self,
        organization_guid: &str,
        user_guid: &str,
        role: OrganizationRole,
        grant: bool,
    ) -> Result<Option<Organization>> {
        let path = format!(
            "{}/{}/{}/{}/{}?recursive=true",
            api::V2,
            api::ORGANIZATIONS,
            organization_guid,
            role.path_segment(),
            user_guid
        );
        debug!(
            "{} {} for user {} in organization {}",
            if grant { "Granting" } else { "Revoking" },
            role,
            user_guid,
            organization_guid
        );

        if grant {
            Ok(Some(self.request(Method::PUT, &path).await?.json()?))
        } else {
            self.request(Method::DELETE, &path).await?;
            Ok(None)
        }
    }

    /// Grant (`grant = true`) or revoke a space role
    ///
    /// Returns the updated space when granting and `None` when revoking.
    pub async fn set_space_role(
        &self,
        space_guid: &str,
        user_guid: &str,
        role: SpaceRole,
        grant: bool,
    ) -> Result<Option<Space>> {
        let path = format!(
            "{}/{}/{}/{}/{}",
            api::V2,
            api::SPACES,
            space_guid,
            role.path_segment(),
            user_guid
        );
        debug!(
            "{} {} for user {} in space {}",
            if grant { "Granting" } else { "Revoking" },
            role,
            user_guid,
            space_guid
        );

        if grant {
            Ok(Some(self.request(Method::PUT, &path).await?.json()?))
        } else {
            self.request(Method::DELETE, &path).await?;
            Ok(None)
        }
    }

    /// Check whether a user holds a role in an organization
    pub async fn has_organization_role(
        &self,
        organization_guid: &str,
        user_guid: &str,
        role: OrganizationRole,
    ) -> Result<bool> {
        let users = self.users_for_organization(organization_guid).await?;
        Ok(users
            .iter()
            .any(|u| u.metadata.guid == user_guid && u.entity.has_organization_role(role)))
    }
}
