//! Address Book Server - Main Entry Point
//!
//! Usage: `addressbook-server [CONFIG_FILE]`

use api::{init_logging, init_metrics, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let config = ServerConfig::load(config_path.as_deref())?;

    init_logging(&config.log_level, config.log_json)?;

    info!("=== Address Book v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Storage: {:?}", config.storage);

    let metrics = init_metrics()?;
    run_server(&config, Some(metrics)).await?;

    Ok(())
}
