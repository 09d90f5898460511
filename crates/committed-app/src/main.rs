use anyhow::Context;
use tracing::{error, info};

use committed_infrastructure::config::AppConfig;
use committed_infrastructure::logging;
use committed_lib::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    if let Err(e) = logging::init_logger(&config.log_dir) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    info!(
        environment = %config.environment,
        port = config.port,
        database = %config.database_path.display(),
        "Starting committed"
    );

    if let Err(e) = start_server(config).await {
        error!("Server exited with error: {:#}", e);
        return Err(e);
    }

    info!("Server stopped");
    Ok(())
}
