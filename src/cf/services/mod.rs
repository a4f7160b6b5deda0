//! Service module: managed instances, plans, services and user-provided instances

mod api;
mod models;

pub use models::{
    LastOperation, Service, ServiceEntity, ServiceInstance, ServiceInstanceEntity, ServicePlan,
    ServicePlanEntity, UserProvidedServiceInstance, UserProvidedServiceInstanceEntity,
};
