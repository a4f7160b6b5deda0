//! Stack data models

use serde::{Deserialize, Serialize};

use crate::cf::traits::NamedEntity;
use crate::cf::Resource;

/// Stack record
pub type Stack = Resource<StackEntity>;

/// Stack (root filesystem) entity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StackEntity {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NamedEntity for StackEntity {
    fn name(&self) -> &str {
        &self.name
    }
}
