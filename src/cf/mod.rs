//! Cloud Foundry v2 API client module
//!
//! This module provides a client for the Cloud Controller v2 REST API:
//! bearer token acquisition, paginated collection fetches and typed
//! accessors per resource kind.

pub mod applications;
mod client;
pub mod events;
pub mod info;
pub(crate) mod models;
pub mod organizations;
pub mod quotas;
pub mod services;
pub mod spaces;
pub mod stacks;
mod token;
pub mod traits;
pub mod users;

pub use applications::{
    Application, ApplicationEntity, ApplicationSummary, DomainSummary, RouteSummary,
    ServiceSummary,
};
pub use client::{ApiResponse, CfClient, ClientConfig};
pub use events::{Event, EventEntity, EventFilter};
pub use info::Info;
pub use models::{Metadata, Resource, ResourceEnvelope};
pub use organizations::{DeleteOrganization, Organization, OrganizationEntity, OrganizationRequest};
pub use quotas::{
    OrganizationQuota, OrganizationQuotaEntity, QuotaFilter, SpaceQuota, SpaceQuotaEntity,
};
pub use services::{
    LastOperation, Service, ServiceEntity, ServiceInstance, ServiceInstanceEntity, ServicePlan,
    ServicePlanEntity, UserProvidedServiceInstance, UserProvidedServiceInstanceEntity,
};
pub use spaces::{Space, SpaceEntity, SpaceSummary, SpaceSummaryApplication};
pub use stacks::{Stack, StackEntity};
pub use token::Credentials;
pub use traits::{CfResource, NamedEntity};
pub use users::{
    OrganizationRole, SpaceRole, User, UserEntity, UserRoles, UserRolesEntity, UserSummary,
    UserSummaryEntity,
};
