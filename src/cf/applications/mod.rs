//! Application module

mod api;
mod models;

pub use models::{
    Application, ApplicationEntity, ApplicationSummary, DomainSummary, RouteSummary,
    ServiceSummary,
};
