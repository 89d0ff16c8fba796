mod actions;
mod auth;
mod fetch;

use moderation::{AuthAccessor, EndpointConfig, ModerationList, Moderated};
use payloads::APIClient;
use serde::de::DeserializeOwned;
use test_helpers::{TestApp, spawn_app, start_time};

/// A list for one screen, signed in as the seeded admin.
pub fn open<E: Moderated + DeserializeOwned>(
    app: &TestApp,
    config: EndpointConfig,
) -> ModerationList<E, impl Fn() -> Option<String>> {
    open_with_record(app, config, Some(app.session_record()))
}

pub fn open_with_record<E: Moderated + DeserializeOwned>(
    app: &TestApp,
    config: EndpointConfig,
    record: Option<String>,
) -> ModerationList<E, impl Fn() -> Option<String>> {
    ModerationList::build(
        config,
        APIClient::new(app.client.address.clone()),
        AuthAccessor::new(move || record.clone()),
        start_time,
        None,
    )
}

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.health_check().await?;

    Ok(())
}
