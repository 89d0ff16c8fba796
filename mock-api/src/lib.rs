pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;

use crate::store::Store;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, store: Store) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // bearer tokens travel in a header, so no credentials mode
        let cors = if allowed_origins.iter().any(|o| o == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            allowed_origins.iter().fold(
                Cors::default().allow_any_method().allow_any_header(),
                |cors, origin| cors.allowed_origin(origin),
            )
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Allowed CORS origins. "*" allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let port = match var("PORT") {
            Ok(port) => port.parse().context("PORT must be a port number")?,
            Err(_) => 8000,
        };

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            allowed_origins,
        })
    }

    /// Loopback on an OS-assigned port, any origin.
    pub fn ephemeral() -> Self {
        Config {
            ip: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
        }
    }
}
