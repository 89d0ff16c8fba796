//! Development server for alumni portal admin UI development
//!
//! Runs the mock backend on a fixed port with sample data in every
//! collection and a known admin account, following the real clock.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use mock_api::{Config, store::Store, telemetry, time::TimeSource};
use payloads::UserType;
use test_helpers::{ADMIN_EMAIL, ADMIN_PASSWORD, mock::DevDataset};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting alumni portal development server");

    let store = Store::new(TimeSource::live());
    store.add_account(ADMIN_EMAIL, ADMIN_PASSWORD, UserType::Admin);
    let dataset = DevDataset::seed(&store);

    let mut config = Config::from_env()?;
    let server = mock_api::build(&mut config, store)?;
    tokio::spawn(async move {
        if let Err(e) = server.await {
            telemetry::log_error(e);
        }
    });

    info!("🎯 Development server ready!");
    info!("   API: http://{}:{}", config.ip, config.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://{}:{} trunk serve",
        config.ip, config.port
    );
    info!("   Login: {ADMIN_EMAIL} / {ADMIN_PASSWORD} (admin)");
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
