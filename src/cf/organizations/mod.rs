//! Organization module

mod api;
mod models;

pub use models::{DeleteOrganization, Organization, OrganizationEntity, OrganizationRequest};
