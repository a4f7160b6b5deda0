//! Stack module

mod api;
mod models;

pub use models::{Stack, StackEntity};
