//! Quota definitions module

mod api;
mod models;

pub use models::{
    OrganizationQuota, OrganizationQuotaEntity, QuotaFilter, SpaceQuota, SpaceQuotaEntity,
};
