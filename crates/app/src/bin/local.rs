// Markdown Ninja - Local configuration bootstrap

use tracing::{error, info};

use ninja_app::AppContext;
use ninja_common::Location;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    info!("Bootstrapping Markdown Ninja webapp configuration");

    let location = Location::from_env().map_err(|e| {
        error!(code = e.error_code(), "Failed to resolve webapp location: {}", e);
        e
    })?;

    info!(location = %location, "Webapp location resolved");

    let ctx = AppContext::bootstrap(&location);
    let config = ctx.config()?;

    info!(
        env = %config.env,
        cms_base_url = %config.cms_base_url,
        "Configuration loaded successfully"
    );

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
