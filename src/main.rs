//! cfadmin - Main entry point

use clap::Parser;
use log::{debug, info};

use cfadmin::{run_command, CfClient, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cfadmin v{}", env!("CARGO_PKG_VERSION"));
    debug!("API endpoint: {}, command: {:?}", cli.api, cli.command);

    let client = CfClient::new(cli.client_config());

    if let Err(e) = run_command(&client, &cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
