//! Stack API operations

use log::debug;

use crate::cf::{CfClient, CfResource};
use crate::config::{api, defaults};
use crate::error::Result;

use super::models::Stack;

impl CfClient {
    /// Get all stacks (with pagination)
    pub async fn stacks(&self) -> Result<Vec<Stack>> {
        let path = format!("{}/{}", api::V2, api::STACKS);
        self.get_all(&path).await
    }

    /// Get a single stack by GUID
    pub async fn stack(&self, guid: &str) -> Result<Stack> {
        let path = format!("{}/{}/{}", api::V2, api::STACKS, guid);
        self.get_json(&path).await
    }

    /// GUID of the `cflinuxfs2` stack, or `None` when the platform has no such stack
    pub async fn cflinuxfs2_stack_guid(&self) -> Result<Option<String>> {
        let stacks = self.stacks().await?;
        let guid = stacks
            .into_iter()
            .find(|s| s.name() == defaults::CFLINUXFS2_STACK)
            .map(|s| s.metadata.guid);

        if guid.is_none() {
            debug!("No {} stack found", defaults::CFLINUXFS2_STACK);
        }
        Ok(guid)
    }
}
