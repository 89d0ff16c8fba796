use crate::{
    BearerToken, EntityId, ModerationStatus, requests, responses,
};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Requests that take longer than this are reported as timeouts.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub timeout: Duration,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn entity_url(&self, collection: &str, id: &EntityId) -> String {
        self.format_url(&format!("{collection}/{}", id.0))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        Ok(request.timeout(self.timeout).send().await?)
    }

    /// The browser fetch backend has no timeout of its own, so the request
    /// races a timer instead.
    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        use futures::future::{Either, select};

        let millis =
            u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let timer = gloo_timers::future::TimeoutFuture::new(millis);
        match select(Box::pin(request.send()), timer).await {
            Either::Left((response, _)) => Ok(response?),
            Either::Right(_) => Err(ClientError::Timeout),
        }
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let request = self.inner_client.get(self.format_url("health_check"));
        let response = self.send(request).await?;
        ok_text(response).await.map(|_| ())
    }

    /// Exchange credentials for an access token. The caller decides where
    /// the resulting session is persisted.
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::LoginResponse, ClientError> {
        let request =
            self.inner_client.post(self.format_url("auth/login")).json(details);
        let response = self.send(request).await?;
        read_body(response).await
    }

    /// Read a collection of entities.
    ///
    /// `list_field` names the property holding the array when the endpoint
    /// wraps it in an object; a bare array is accepted either way.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        list_field: &str,
        status: Option<ModerationStatus>,
        token: &BearerToken,
    ) -> Result<Vec<T>, ClientError> {
        let mut request = self
            .inner_client
            .get(self.format_url(collection))
            .bearer_auth(token.expose());
        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }
        let response = self.send(request).await?;
        let text = ok_text(response).await?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::Malformed(e.to_string()))?;
        let items = extract_list(value, list_field)?;
        decode_records(items)
    }

    /// Send a moderation mutation for one entity.
    pub async fn moderate(
        &self,
        method: Method,
        collection: &str,
        id: &EntityId,
        action_path: &str,
        body: &requests::ModerationRequest,
        token: &BearerToken,
    ) -> Result<responses::ActionEnvelope, ClientError> {
        let url = format!("{}/{action_path}", self.entity_url(collection, id));
        let request = self
            .inner_client
            .request(method, url)
            .bearer_auth(token.expose())
            .json(body);
        let response = self.send(request).await?;
        let text = ok_text(response).await?;
        confirm_envelope(&text)
    }

    pub async fn delete(
        &self,
        collection: &str,
        id: &EntityId,
        token: &BearerToken,
    ) -> Result<(), ClientError> {
        let request = self
            .inner_client
            .delete(self.entity_url(collection, id))
            .bearer_auth(token.expose());
        let response = self.send(request).await?;
        let text = ok_text(response).await?;
        confirm_envelope(&text).map(|_| ())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Missing, expired, or refused credentials (401/403).
    #[error("{0}")]
    Unauthorized(String),
    /// The server understood the request and refused it. The message is the
    /// server's own and is meant to be shown verbatim.
    #[error("{message}")]
    Rejected {
        status: Option<StatusCode>,
        message: String,
    },
    /// A 5xx answer. The body is often a proxy's error page, so only the
    /// status is kept.
    #[error("The server is unavailable right now ({0}). Please try again.")]
    Unavailable(StatusCode),
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
    #[error("The server took too long to respond.")]
    Timeout,
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Malformed(e.to_string())
        } else {
            ClientError::Network(e)
        }
    }
}

impl ClientError {
    /// Network failures, timeouts and malformed responses leave the server
    /// state unknown but unchanged from the client's point of view; the user
    /// may simply retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::Timeout
                | Self::Unavailable(_)
                | Self::Malformed(_)
        )
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn read_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let text = ok_text(response).await?;
    serde_json::from_str(&text)
        .map_err(|e| ClientError::Malformed(e.to_string()))
}

/// Check the status of a response and return its body text.
pub async fn ok_text(
    response: reqwest::Response,
) -> Result<String, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        tracing::debug!(%status, "backend refused request");
    }
    classify(status, text)
}

/// Auth failures prompt a new sign in, server faults are worth retrying, and
/// any other failure carries a message meant for the user.
fn classify(status: StatusCode, text: String) -> Result<String, ClientError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized(error_message(status, &text)));
    }
    if status.is_server_error() {
        return Err(ClientError::Unavailable(status));
    }
    if !status.is_success() {
        return Err(ClientError::Rejected {
            status: Some(status),
            message: error_message(status, &text),
        });
    }
    Ok(text)
}

/// Prefer the `message` of a JSON error body, then the raw text, then the
/// canonical reason phrase.
fn error_message(status: StatusCode, text: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text)
        && let Some(Value::String(message)) = map.get("message")
    {
        return message.clone();
    }
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

/// A 2xx answer still fails when its envelope says `success: false`. Bodies
/// that are empty or not an envelope count as success.
fn confirm_envelope(
    text: &str,
) -> Result<responses::ActionEnvelope, ClientError> {
    let envelope = if text.trim().is_empty() {
        responses::ActionEnvelope::default()
    } else {
        serde_json::from_str(text).unwrap_or_default()
    };
    if envelope.success == Some(false) {
        return Err(ClientError::Rejected {
            status: None,
            message: envelope
                .message
                .clone()
                .unwrap_or_else(|| "The request was rejected".to_string()),
        });
    }
    Ok(envelope)
}

/// Pull the entity array out of a list response.
fn extract_list(
    value: Value,
    list_field: &str,
) -> Result<Vec<Value>, ClientError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if map.get("success") == Some(&Value::Bool(false)) {
                let message = match map.remove("message") {
                    Some(Value::String(message)) => message,
                    _ => "The request was rejected".to_string(),
                };
                return Err(ClientError::Rejected {
                    status: None,
                    message,
                });
            }
            match map.remove(list_field) {
                Some(Value::Array(items)) => Ok(items),
                _ => Err(ClientError::Malformed(format!(
                    "expected a `{list_field}` list"
                ))),
            }
        }
        _ => Err(ClientError::Malformed("expected a list".to_string())),
    }
}

/// Decode each record of a list on its own. A record that cannot be read is
/// logged and skipped so the rest of the collection still shows; the list
/// is malformed only when none of its records can be read.
fn decode_records<T: DeserializeOwned>(
    items: Vec<Value>,
) -> Result<Vec<T>, ClientError> {
    let total = items.len();
    let mut last_error = None;
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|mut item| {
            fold_record_id(&mut item);
            match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable record");
                    last_error = Some(e.to_string());
                    None
                }
            }
        })
        .collect();
    match last_error {
        Some(e) if records.is_empty() && total > 0 => {
            Err(ClientError::Malformed(e))
        }
        _ => Ok(records),
    }
}

/// Document stores often send `_id` next to a virtual `id` holding the same
/// value. Keep a single `id`, preferring the explicit one.
fn fold_record_id(item: &mut Value) {
    let Value::Object(map) = item else {
        return;
    };
    if let Some(raw) = map.remove("_id") {
        map.entry("id").or_insert(raw);
    }
}
