//! One-shot provisioning: replace the `tools` table with the built-in catalog.

use pdfmaster_cms::{Config, Store, service::seed};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let store = Store::connect(&cfg.database_url).await?;
    let count = seed::seed_builtin(&store).await?;
    store.close().await;

    info!(database_url = %cfg.database_url, count, "database seeded successfully");
    Ok(())
}
