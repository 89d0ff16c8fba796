use mock_api::{
    Config, build,
    store::Store,
    telemetry::{get_subscriber, init_subscriber},
    time::TimeSource,
};

/// Mock alumni portal backend with empty collections.
///
/// Environment variables can be set directly or loaded from a .env file:
/// - IP_ADDRESS: bind address (default 127.0.0.1)
/// - PORT: port (default 8000)
/// - ALLOWED_ORIGINS: "*" or a comma-separated list of origins
/// - ADMIN_EMAIL / ADMIN_PASSWORD: the account accepted by /api/auth/login
///
/// The dev-server binary runs the same backend with sample data.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;
    let store = Store::new(TimeSource::live());
    let email = std::env::var("ADMIN_EMAIL")
        .unwrap_or_else(|_| "admin@mitsgwl.ac.in".to_string());
    let password = std::env::var("ADMIN_PASSWORD")
        .unwrap_or_else(|_| "admin123".to_string());
    store.add_account(&email, &password, payloads::UserType::Admin);

    let server = build(&mut config, store)?;
    tracing::info!("Mock API listening on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
