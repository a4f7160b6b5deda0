//! Service data models

use serde::{Deserialize, Serialize};

use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

pub type ServiceInstance = Resource<ServiceInstanceEntity>;
pub type ServicePlan = Resource<ServicePlanEntity>;
pub type Service = Resource<ServiceEntity>;
pub type UserProvidedServiceInstance = Resource<UserProvidedServiceInstanceEntity>;

/// Managed service instance entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceInstanceEntity {
    pub name: String,
    #[serde(default)]
    pub service_plan_guid: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(rename = "type", default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub last_operation: Option<LastOperation>,
}

/// Last asynchronous operation run against a service instance
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LastOperation {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub state: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Service plan entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServicePlanEntity {
    pub name: String,
    #[serde(default)]
    pub free: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_guid: Option<String>,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Service (offering) entity; identified by `label` rather than `name`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceEntity {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub bindable: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// JSON-encoded string of broker-provided extras
    #[serde(default)]
    pub extra: Option<String>,
    #[serde(default)]
    pub service_broker_guid: Option<String>,
}

/// User-provided service instance entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProvidedServiceInstanceEntity {
    pub name: String,
    #[serde(default)]
    pub credentials: Option<serde_json::Value>,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(rename = "type", default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub syslog_drain_url: Option<String>,
    #[serde(default)]
    pub route_service_url: Option<String>,
}

impl NamedEntity for ServiceInstanceEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for ServicePlanEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedEntity for ServiceEntity {
    fn name(&self) -> &str {
        &self.label
    }
}

impl NamedEntity for UserProvidedServiceInstanceEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ServiceEntity {
    /// Decode the `extra` field, which the API embeds as a JSON string
    pub fn extra_json(&self) -> Option<serde_json::Value> {
        self.extra
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::models::resource_json;
    use crate::cf::CfResource;

    #[test]
    fn test_service_named_by_label() {
        let service: Service = serde_json::from_value(resource_json(
            "53f52780-e93c-4af7-a96c-6958311c40e5",
            serde_json::json!({
                "label": "label-58",
                "active": true,
                "bindable": true,
                "extra": "{\"displayName\":\"Postgres\"}"
            }),
        ))
        .unwrap();

        assert_eq!(service.name(), "label-58");
        assert_eq!(
            service.entity.extra_json().unwrap()["displayName"],
            serde_json::json!("Postgres")
        );
    }

    #[test]
    fn test_service_instance_last_operation() {
        let entity: ServiceInstanceEntity = serde_json::from_value(serde_json::json!({
            "name": "name-1508",
            "type": "managed_service_instance",
            "last_operation": {
                "type": "create",
                "state": "succeeded",
                "description": ""
            }
        }))
        .unwrap();

        assert_eq!(entity.instance_type.as_deref(), Some("managed_service_instance"));
        assert_eq!(entity.last_operation.unwrap().state, "succeeded");
        assert!(entity.tags.is_empty());
    }

    #[test]
    fn test_malformed_extra_is_none() {
        let entity = ServiceEntity {
            label: "l".to_string(),
            description: None,
            active: None,
            bindable: None,
            tags: vec![],
            extra: Some("not json".to_string()),
            service_broker_guid: None,
        };
        assert!(entity.extra_json().is_none());
    }
}
