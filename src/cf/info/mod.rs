//! Platform info module

mod api;
mod models;

pub use models::Info;
