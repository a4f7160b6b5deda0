//! User module: users, summaries and organization/space role membership

mod api;
mod models;

pub use models::{
    OrganizationRole, SpaceRole, User, UserEntity, UserRoles, UserRolesEntity, UserSummary,
    UserSummaryEntity,
};
