//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::api;
use crate::cli::{error, info, print_claims, print_routes_table, success, warn};
use crate::config;
use crate::session::claims;

/// Initialize a new edgeguard.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("edgeguard.toml");

    if config_path.exists() {
        warn("edgeguard.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created edgeguard.toml");
    info("Edit the configuration file and run 'edgeguard serve' to start the guard");

    Ok(())
}

/// Start the HTTP server
pub async fn serve(host: &str, port: u16) -> Result<()> {
    let config = config::load_config()?;
    api::run_server(config, host, port).await?;
    Ok(())
}

/// Print the configured route classification table
pub async fn routes() -> Result<()> {
    let config = config::load_config()?;
    print_routes_table(&config.routes);
    Ok(())
}

/// Decode a token and report its claims and expiry status
pub async fn check(token: &str) -> Result<()> {
    match claims::decode_unverified(token) {
        Ok(decoded) => {
            print_claims(&decoded);
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to decode token: {}", e));
            Err(e.into())
        }
    }
}
