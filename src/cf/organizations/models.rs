//! Organization data models

use serde::{Deserialize, Serialize};

use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

/// Organization record
pub type Organization = Resource<OrganizationEntity>;

/// Organization entity from the Cloud Controller
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrganizationEntity {
    pub name: String,
    #[serde(default)]
    pub billing_enabled: Option<bool>,
    #[serde(default)]
    pub quota_definition_guid: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub spaces_url: Option<String>,
    #[serde(default)]
    pub users_url: Option<String>,
}

impl NamedEntity for OrganizationEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl OrganizationEntity {
    /// Whether the organization is active (anything but `suspended`)
    pub fn is_active(&self) -> bool {
        self.status.as_deref() != Some("suspended")
    }
}

/// Body of `POST /v2/organizations`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrganizationRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_definition_guid: Option<String>,
}

impl OrganizationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quota_definition_guid: None,
        }
    }

    pub fn with_quota(mut self, quota_definition_guid: impl Into<String>) -> Self {
        self.quota_definition_guid = Some(quota_definition_guid.into());
        self
    }
}

/// Parameters of an organization deletion
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOrganization {
    pub guid: String,
    /// Also delete spaces, apps and service instances in the organization
    pub recursive: bool,
    /// Let the Cloud Controller delete in a background job
    pub asynchronous: bool,
}

impl DeleteOrganization {
    pub(crate) fn query(&self) -> String {
        format!("recursive={}&async={}", self.recursive, self.asynchronous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::models::resource_json;
    use crate::cf::CfResource;

    fn org_json(guid: &str, name: &str) -> serde_json::Value {
        resource_json(
            guid,
            serde_json::json!({
                "name": name,
                "billing_enabled": false,
                "quota_definition_guid": "dcb680a9-b190-4838-a3d2-b84aa17517a6",
                "status": "active",
                "spaces_url": format!("/v2/organizations/{}/spaces", guid),
                "users_url": format!("/v2/organizations/{}/users", guid)
            }),
        )
    }

    #[test]
    fn test_organization_deserialization() {
        let org: Organization = serde_json::from_value(org_json(
            "a7aff246-5f5b-4cf8-87d8-f316053e4a20",
            "the-system_domain-org-name",
        ))
        .unwrap();

        assert_eq!(org.guid(), "a7aff246-5f5b-4cf8-87d8-f316053e4a20");
        assert_eq!(org.name(), "the-system_domain-org-name");
        assert!(org.entity.is_active());
        assert_eq!(org.entity.billing_enabled, Some(false));
    }

    #[test]
    fn test_suspended_organization() {
        let entity = OrganizationEntity {
            name: "org".to_string(),
            billing_enabled: None,
            quota_definition_guid: None,
            status: Some("suspended".to_string()),
            spaces_url: None,
            users_url: None,
        };
        assert!(!entity.is_active());
    }

    #[test]
    fn test_organization_request_omits_missing_quota() {
        let body = serde_json::to_value(OrganizationRequest::new("some-org-name")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "some-org-name"}));

        let body = serde_json::to_value(
            OrganizationRequest::new("some-org-name").with_quota("some-quota-definition-guid"),
        )
        .unwrap();
        assert_eq!(
            body["quota_definition_guid"],
            serde_json::json!("some-quota-definition-guid")
        );
    }

    #[test]
    fn test_delete_organization_query() {
        let delete = DeleteOrganization {
            guid: "g".to_string(),
            recursive: true,
            asynchronous: false,
        };
        assert_eq!(delete.query(), "recursive=true&async=false");
    }
}
