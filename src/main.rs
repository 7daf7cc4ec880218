use dotenvy::dotenv;
use mitra_dashboard::{
    config,
    core::overview,
    errors::Result,
    store::DashboardStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Seed the in-memory store for this session
    let store = DashboardStore::from_seed(app_config.store.clone());
    info!(
        products = store.products().len(),
        orders = store.orders().len(),
        shipments = store.shipments().len(),
        transactions = store.transactions().len(),
        "Store seeded."
    );

    // 5. Report the home-tab overview
    let summary = overview::summarize(&store);
    for line in overview::format_summary(&summary).lines() {
        info!("{line}");
    }

    Ok(())
}
