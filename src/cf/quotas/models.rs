//! Quota definition data models

use serde::{Deserialize, Serialize};

use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

/// Organization quota definition record
pub type OrganizationQuota = Resource<OrganizationQuotaEntity>;

/// Space quota definition record
pub type SpaceQuota = Resource<SpaceQuotaEntity>;

/// Organization quota definition entity
///
/// Limits use `-1` for "unlimited", as on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrganizationQuotaEntity {
    pub name: String,
    #[serde(default)]
    pub non_basic_services_allowed: Option<bool>,
    #[serde(default)]
    pub total_services: Option<i64>,
    #[serde(default)]
    pub total_routes: Option<i64>,
    #[serde(default)]
    pub total_private_domains: Option<i64>,
    /// Memory limit in megabytes
    #[serde(default)]
    pub memory_limit: Option<i64>,
    #[serde(default)]
    pub instance_memory_limit: Option<i64>,
    #[serde(default)]
    pub app_instance_limit: Option<i64>,
}

/// Space quota definition entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpaceQuotaEntity {
    pub name: String,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub non_basic_services_allowed: Option<bool>,
    #[serde(default)]
    pub total_services: Option<i64>,
    #[serde(default)]
    pub total_routes: Option<i64>,
    #[serde(default)]
    pub memory_limit: Option<i64>,
    #[serde(default)]
    pub instance_memory_limit: Option<i64>,
    #[serde(default)]
    pub app_instance_limit: Option<i64>,
}

impl NamedEntity for OrganizationQuotaEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for SpaceQuotaEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Filter for quota definition listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotaFilter {
    pub name: Option<String>,
}

impl QuotaFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Query string (without leading `?`), empty when no filter is set
    pub(crate) fn query(&self) -> String {
        match &self.name {
            Some(name) => format!("q=name:{}", urlencoding::encode(name)),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_filter_query() {
        assert_eq!(QuotaFilter::default().query(), "");
        assert_eq!(
            QuotaFilter::by_name("the-system_domain-org-name").query(),
            "q=name:the-system_domain-org-name"
        );
    }

    #[test]
    fn test_quota_filter_encodes_name() {
        assert_eq!(QuotaFilter::by_name("a b&c").query(), "q=name:a%20b%26c");
    }

    #[test]
    fn test_unlimited_quota_deserialization() {
        let entity: OrganizationQuotaEntity = serde_json::from_value(serde_json::json!({
            "name": "default",
            "non_basic_services_allowed": true,
            "total_services": 100,
            "total_routes": 1000,
            "memory_limit": 10240,
            "instance_memory_limit": -1,
            "app_instance_limit": -1
        }))
        .unwrap();

        assert_eq!(entity.memory_limit, Some(10240));
        assert_eq!(entity.instance_memory_limit, Some(-1));
        assert!(entity.total_private_domains.is_none());
    }
}
