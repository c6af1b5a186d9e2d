//! Warden entry point
//!
//! Run with:
//! ```bash
//! cargo run -p warden-bot
//! ```
//!
//! Configuration is loaded from environment variables (`DISCORD_TOKEN`,
//! `WARDEN_CONFIG_PATH`, `APP_ENV`).

use warden_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the bot
    if let Err(e) = run().await {
        error!(error = %e, "Warden failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Warden...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        config_path = %config.storage.config_path.display(),
        "Configuration loaded"
    );

    // Run the gateway client
    warden_bot::run(config).await?;

    Ok(())
}
