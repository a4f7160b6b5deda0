//! cfadmin - Cloud Foundry v2 API client
//!
//! A typed client for the Cloud Controller v2 REST API plus a small CLI
//! on top of it.
//!
//! # Features
//!
//! - Static bearer token or OAuth2 client-credentials authentication
//! - Token fetched once per client and shared by concurrent callers
//! - Transparent pagination with a page ceiling
//! - Typed accessors for organizations, spaces, applications, services,
//!   users and roles, stacks, quotas and events
//!
//! # Example
//!
//! ```no_run
//! use cfadmin::{CfClient, ClientConfig};
//!
//! # async fn example() -> cfadmin::Result<()> {
//! let config = ClientConfig::new("https://api.example.com")
//!     .with_client_credentials("my-id", "my-secret");
//! let client = CfClient::new(config);
//!
//! for org in client.organizations().await? {
//!     println!("{} {}", org.metadata.guid, org.entity.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cf;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cf::{CfClient, CfResource, ClientConfig, Credentials};
pub use cli::{Cli, Command};
pub use commands::run_command;
pub use error::{CfError, Result};
pub use output::print_json;
