//! Audit event module

mod api;
mod models;

pub use models::{Event, EventEntity, EventFilter};
