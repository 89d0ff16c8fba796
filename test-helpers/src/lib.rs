pub mod mock;

use jiff::{SignedDuration, Timestamp};
use mock_api::{Config, store::Store, telemetry, time::TimeSource};
use payloads::{APIClient, EntityId, ModerationStatus, UserType};
use serde_json::{Value, json};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const ADMIN_EMAIL: &str = "admin@mitsgwl.ac.in";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    pub store: Store,
    pub time_source: TimeSource,
    /// Access token of the seeded admin account.
    pub token: String,
    pub token_expiry: Timestamp,
}

/// The instant the mock server clock starts at.
pub fn start_time() -> Timestamp {
    "2025-01-01T00:00:00Z".parse().unwrap()
}

impl TestApp {
    /// The persisted auth record a signed-in admin would have, as written
    /// by the login screen.
    pub fn session_record(&self) -> String {
        session_record(&self.token, self.token_expiry)
    }

    /// A record that expired an hour before the server clock.
    pub fn expired_session_record(&self) -> String {
        let expiry = start_time() - SignedDuration::from_hours(1);
        session_record(&self.token, expiry)
    }

    /// A client for the same server that gives up after `timeout`.
    pub fn client_with_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> APIClient {
        APIClient::new(self.client.address.clone()).with_timeout(timeout)
    }

    pub fn status_of(
        &self,
        collection: &str,
        id: &str,
    ) -> Option<ModerationStatus> {
        let doc = self.store.get(collection, &EntityId::from(id))?;
        ModerationStatus::parse(doc.get("status")?.as_str()?)
    }

    pub fn exists(&self, collection: &str, id: &str) -> bool {
        self.store.get(collection, &EntityId::from(id)).is_some()
    }
}

pub fn session_record(token: &str, expiry: Timestamp) -> String {
    json!({
        "accessToken": token,
        "userType": "admin",
        "expiry": expiry.to_string(),
    })
    .to_string()
}

/// Spawn the mock api on `port` with empty collections and one admin account.
pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let time_source = TimeSource::fixed(start_time());
    let store = Store::new(time_source.clone());
    store.add_account(ADMIN_EMAIL, ADMIN_PASSWORD, UserType::Admin);
    let (token, token_expiry) = store.issue_token(UserType::Admin);

    let mut config = Config {
        port,
        ..Config::ephemeral()
    };
    let server = mock_api::build(&mut config, store.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient::new(format!("http://127.0.0.1:{}", config.port)),
        store,
        time_source,
        token,
        token_expiry,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

pub fn alumni_a() -> Value {
    json!({
        "_id": "A",
        "name": "Asha Verma",
        "email": "a@mitsgwl.ac.in",
        "branch": "CSE",
        "batch": 2019,
        "location": "Gwalior",
        "company": "Infosys",
        "designation": "Engineer",
        "status": "pending",
    })
}

pub fn alumni_b() -> Value {
    json!({
        "_id": "B",
        "name": "Bhavesh Rao",
        "email": "b@x.com",
        "branch": "ECE",
        "batch": 2020,
        "location": "Pune",
        "status": "approved",
    })
}

pub fn job(id: &str, title: &str, status: ModerationStatus) -> Value {
    json!({
        "_id": id,
        "title": title,
        "company": "Acme Corp",
        "location": "Bengaluru",
        "jobType": "Full-time",
        "status": status.to_string(),
    })
}

pub fn student(id: &str, name: &str, status: ModerationStatus) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@mitsgwl.ac.in", id.to_lowercase()),
        "branch": "CSE",
        "batch": 2026,
        "status": status.to_string(),
    })
}

pub fn registration(id: &str, name: &str, user_type: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@mitsgwl.ac.in", id.to_lowercase()),
        "userType": user_type,
        "branch": "ME",
        "batch": 2024,
        "status": "pending",
    })
}
