//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::cf::ClientConfig;
use crate::config::{defaults, env};

/// Cloud Foundry administration CLI
#[derive(Parser, Debug)]
#[command(name = "cfadmin")]
#[command(version)]
#[command(about = "Inspect a Cloud Foundry platform through the v2 API", long_about = None)]
pub struct Cli {
    /// Cloud Controller API endpoint (e.g. https://api.example.com)
    #[arg(short, long, env = env::API)]
    pub api: String,

    /// Bearer token (takes precedence over client credentials)
    #[arg(short, long, env = env::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// OAuth2 client id used to mint a token
    #[arg(long, env = env::CLIENT_ID)]
    pub client_id: Option<String>,

    /// OAuth2 client secret used to mint a token
    #[arg(long, env = env::CLIENT_SECRET, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Token endpoint (defaults to the one advertised by /v2/info)
    #[arg(long, env = env::TOKEN_ENDPOINT)]
    pub token_endpoint: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show platform information
    Info,
    /// List organizations
    Orgs,
    /// Show a single organization
    Org {
        /// Organization GUID
        guid: String,
    },
    /// List spaces of an organization
    Spaces {
        /// Organization GUID
        #[arg(long)]
        org: String,
    },
    /// List applications of a space
    Apps {
        /// Space GUID
        #[arg(long)]
        space: String,
    },
    /// List service instances of a space
    Services {
        /// Space GUID
        #[arg(long)]
        space: String,

        /// List user-provided service instances instead of managed ones
        #[arg(long, default_value_t = false)]
        user_provided: bool,
    },
    /// List users and their roles in an organization or a space
    Users {
        /// Organization GUID
        #[arg(long, required_unless_present = "space", conflicts_with = "space")]
        org: Option<String>,

        /// Space GUID
        #[arg(long)]
        space: Option<String>,
    },
    /// List stacks
    Stacks,
    /// List organization quota definitions
    Quotas {
        /// Only the quota with this name
        #[arg(long)]
        name: Option<String>,
    },
    /// List audit events
    Events {
        /// Only events about this application GUID
        #[arg(long)]
        app: Option<String>,

        /// Only events of this type (e.g. audit.app.update)
        #[arg(long = "type")]
        event_type: Option<String>,
    },
}

impl Cli {
    /// Build the client configuration from flags and environment
    ///
    /// A token wins over client credentials; a lone client id or secret
    /// leaves the client without credentials.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.api);

        if let Some(token) = &self.token {
            config = config.with_access_token(token);
        } else if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            config = config.with_client_credentials(id, secret);
        }

        if let Some(endpoint) = &self.token_endpoint {
            config = config.with_token_endpoint(endpoint);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::Credentials;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["cfadmin", "--api", "https://api.example.com", "orgs"]);
        assert_eq!(cli.api, "https://api.example.com");
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.command, Command::Orgs);
    }

    #[test]
    fn test_token_takes_precedence() {
        let cli = Cli::parse_from([
            "cfadmin",
            "--api",
            "https://api.example.com",
            "--token",
            "qwerty123456",
            "--client-id",
            "my-id",
            "--client-secret",
            "my-secret",
            "stacks",
        ]);
        let config = cli.client_config();
        assert_eq!(
            config.credentials(),
            Some(&Credentials::AccessToken("qwerty123456".to_string()))
        );
    }

    #[test]
    fn test_client_credentials_config() {
        let cli = Cli::parse_from([
            "cfadmin",
            "--api",
            "https://api.example.com/",
            "--client-id",
            "my-id",
            "--client-secret",
            "my-secret",
            "info",
        ]);
        let config = cli.client_config();
        assert_eq!(config.api_endpoint(), "https://api.example.com");
        assert!(matches!(
            config.credentials(),
            Some(Credentials::ClientCredentials { .. })
        ));
    }

    #[test]
    fn test_client_id_without_secret_has_no_credentials() {
        let cli = Cli::parse_from([
            "cfadmin",
            "--api",
            "https://api.example.com",
            "--client-id",
            "my-id",
            "info",
        ]);
        assert!(cli.client_config().credentials().is_none());
    }

    #[test]
    fn test_users_requires_org_or_space() {
        let result = Cli::try_parse_from(["cfadmin", "--api", "https://x", "users"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "cfadmin", "--api", "https://x", "users", "--org", "o", "--space", "s",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["cfadmin", "--api", "https://x", "users", "--space", "s"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Users {
                org: None,
                space: Some("s".to_string())
            }
        );
    }

    #[test]
    fn test_events_type_flag() {
        let cli = Cli::parse_from([
            "cfadmin",
            "--api",
            "https://x",
            "events",
            "--app",
            "app-guid",
            "--type",
            "audit.app.update",
        ]);
        assert_eq!(
            cli.command,
            Command::Events {
                app: Some("app-guid".to_string()),
                event_type: Some("audit.app.update".to_string())
            }
        );
    }
}
