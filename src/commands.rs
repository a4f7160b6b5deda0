//! Subcommand handlers

use log::debug;

use crate::cf::{CfClient, EventFilter, QuotaFilter};
use crate::cli::Command;
use crate::error::{CfError, Result};
use crate::output::print_json;

/// Run a subcommand against the client and print its result as JSON
pub async fn run_command(client: &CfClient, command: &Command) -> Result<()> {
    debug!("Running command: {:?}", command);

    match command {
        Command::Info => print_json(&client.info().await?),
        Command::Orgs => print_json(&client.organizations().await?),
        Command::Org { guid } => print_json(&client.organization(guid).await?),
        Command::Spaces { org } => print_json(&client.spaces(org).await?),
        Command::Apps { space } => print_json(&client.applications(space).await?),
        Command::Services {
            space,
            user_provided: false,
        } => print_json(&client.services(space).await?),
        Command::Services {
            space,
            user_provided: true,
        } => print_json(&client.user_services(space).await?),
        Command::Users { org: Some(org), .. } => {
            print_json(&client.users_for_organization(org).await?)
        }
        Command::Users {
            space: Some(space), ..
        } => print_json(&client.users_for_space(space).await?),
        Command::Users { .. } => Err(CfError::Config(
            "either an organization or a space is required".to_string(),
        )),
        Command::Stacks => print_json(&client.stacks().await?),
        Command::Quotas { name } => {
            let filter = name.as_deref().map(QuotaFilter::by_name);
            print_json(&client.quota_definitions(filter.as_ref()).await?)
        }
        Command::Events { app, event_type } => {
            let filter = EventFilter {
                actee: app.clone(),
                event_type: event_type.clone(),
            };
            print_json(&client.events(Some(&filter)).await?)
        }
    }
}
