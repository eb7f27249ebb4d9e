//! Donify session bootstrap.
//!
//! Initializes logging, loads the seed configuration, opens the (by
//! default in-memory) session store, seeds the fixture organizations, and
//! reports what the session starts with.

use donify::config;
use donify::core::organization;
use donify::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the seed configuration
    let seed_config = config::seed::load_default_config()
        .inspect_err(|e| error!("Failed to load seed configuration: {e}"))?;
    info!(
        "Loaded seed configuration with {} organizations.",
        seed_config.organizations.len()
    );

    // 4. Open the session store and create tables
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Session store opened."))
        .inspect_err(|e| error!("Failed to open session store: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Seed the fixture organizations
    config::seed::seed_initial_organizations(&db, &seed_config)
        .await
        .inspect_err(|e| error!("Failed to seed organizations: {e}"))?;

    let organizations = organization::list_organizations(&db).await?;
    info!(
        "Session ready: {} organizations available to donors.",
        organizations.len()
    );
    for org in &organizations {
        info!(
            "  {} [{}] - {} ({} donors, {} received)",
            org.name, org.category, org.location, org.donor_count, org.total_received
        );
    }

    Ok(())
}
