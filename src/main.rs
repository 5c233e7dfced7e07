mod domain;
mod entity_table;
mod owner_registry;
mod property_registry;
mod registry;
mod interpreter;

mod app_system;
mod line_source;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, Config, RegistrySystem, SystemError};
use crate::line_source::run_session;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(input_dir = %config.input_dir.display(), pattern = %config.pattern, "Starting property registry");

    let system = RegistrySystem::start(&config);

    let mut stdout = tokio::io::stdout();
    let session = run_session(&system.client, &config, &mut stdout).await;
    if let Err(e) = &session {
        error!(error = %e, "Session aborted");
    }

    system.shutdown().await?;
    session
}
