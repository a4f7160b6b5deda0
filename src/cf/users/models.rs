//! User data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cf::{Organization, Resource, Space};

/// User record
pub type User = Resource<UserEntity>;

/// User summary record
pub type UserSummary = Resource<UserSummaryEntity>;

/// User record as listed by the `user_roles` endpoints
pub type UserRoles = Resource<UserRolesEntity>;

/// User entity from the Cloud Controller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserEntity {
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub default_space_guid: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Every organization and space a user is associated with, grouped by role
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummaryEntity {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub managed_organizations: Vec<Organization>,
    #[serde(default)]
    pub billing_managed_organizations: Vec<Organization>,
    #[serde(default)]
    pub audited_organizations: Vec<Organization>,
    #[serde(default)]
    pub spaces: Vec<Space>,
    #[serde(default)]
    pub managed_spaces: Vec<Space>,
    #[serde(default)]
    pub audited_spaces: Vec<Space>,
}

/// User entity with the roles it holds in one organization or space
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRolesEntity {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub organization_roles: Vec<String>,
    #[serde(default)]
    pub space_roles: Vec<String>,
}

impl UserRolesEntity {
    pub fn has_organization_role(&self, role: OrganizationRole) -> bool {
        self.organization_roles
            .iter()
            .any(|r| r == role.role_name())
    }

    pub fn has_space_role(&self, role: SpaceRole) -> bool {
        self.space_roles.iter().any(|r| r == role.role_name())
    }
}

/// Organization roles a user can be granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationRole {
    User,
    Manager,
    BillingManager,
    Auditor,
}

impl OrganizationRole {
    /// Membership collection under `/v2/organizations/:guid/`
    pub fn path_segment(self) -> &'static str {
        match self {
            OrganizationRole::User => "users",
            OrganizationRole::Manager => "managers",
            OrganizationRole::BillingManager => "billing_managers",
            OrganizationRole::Auditor => "auditors",
        }
    }

    /// Role name as reported in `organization_roles`
    pub fn role_name(self) -> &'static str {
        match self {
            OrganizationRole::User => "org_user",
            OrganizationRole::Manager => "org_manager",
            OrganizationRole::BillingManager => "billing_manager",
            OrganizationRole::Auditor => "org_auditor",
        }
    }
}

impl fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role_name())
    }
}

/// Space roles a user can be granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceRole {
    Developer,
    Manager,
    Auditor,
}

impl SpaceRole {
    /// Membership collection under `/v2/spaces/:guid/`
    pub fn path_segment(self) -> &'static str {
        match self {
            SpaceRole::Developer => "developers",
            SpaceRole::Manager => "managers",
            SpaceRole::Auditor => "auditors",
        }
    }

    /// Role name as reported in `space_roles`
    pub fn role_name(self) -> &'static str {
        match self {
            SpaceRole::Developer => "space_developer",
            SpaceRole::Manager => "space_manager",
            SpaceRole::Auditor => "space_auditor",
        }
    }
}

impl fmt::Display for SpaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role_name())
    }
}
