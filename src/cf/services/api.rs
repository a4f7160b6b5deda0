//! Service API operations

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Service, ServiceInstance, ServicePlan, UserProvidedServiceInstance};

impl CfClient {
    /// Get all managed service instances of a space (with pagination)
    pub async fn services(&self, space_guid: &str) -> Result<Vec<ServiceInstance>> {
        let path = format!(
            "{}/{}/{}/{}",
            api::V2,
            api::SPACES,
            space_guid,
            api::SERVICE_INSTANCES
        );
        self.get_all(&path).await
    }

    /// Get a managed service instance by GUID
    pub async fn service_instance(&self, guid: &str) -> Result<ServiceInstance> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICE_INSTANCES, guid);
        self.get_json(&path).await
    }

    /// Get a service plan by GUID
    pub async fn service_plan(&self, guid: &str) -> Result<ServicePlan> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICE_PLANS, guid);
        self.get_json(&path).await
    }

    /// Get a service offering by GUID
    pub async fn service(&self, guid: &str) -> Result<Service> {
        let path = format!("{}/{}/{}", api::V2, api::SERVICES, guid);
        self.get_json(&path).await
    }

    /// Get all user-provided service instances of a space (with pagination)
    pub async fn user_services(&self, space_guid: &str) -> Result<Vec<UserProvidedServiceInstance>> {
        let path = format!(
            "{}/{}?q=space_guid:{}",
            api::V2,
            api::USER_PROVIDED_SERVICE_INSTANCES,
            urlencoding::encode(space_guid)
        );
        self.get_all(&path).await
    }

    /// Get a user-provided service instance by GUID
    pub async fn user_service_instance(&self, guid: &str) -> Result<UserProvidedServiceInstance> {
        let path = format!(
            "{}/{}/{}",
            api::V2,
            api::USER_PROVIDED_SERVICE_INSTANCES,
            guid
        );
        self.get_json(&path).await
    }
}
