//! Read-only access to the persisted auth session.
//!
//! The login flow writes a single record (`accessToken`, `userType`,
//! `expiry`) to client storage. The moderation controller only ever reads
//! it, and treats a missing, unreadable, or expired record as unauthorized
//! without attempting the request.

use jiff::Timestamp;
use payloads::{BearerToken, UserType};
use serde::{Deserialize, Deserializer};

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "auth";

/// Source of the raw persisted session record.
pub trait SessionReader {
    fn read_record(&self) -> Option<String>;
}

impl<F> SessionReader for F
where
    F: Fn() -> Option<String>,
{
    fn read_record(&self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("You are not signed in. Please sign in to continue.")]
    Missing,
    #[error("Your saved session could not be read. Please sign in again.")]
    Unreadable,
    #[error("Your session has expired. Please sign in again.")]
    Expired,
}

/// Decoded session record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(deserialize_with = "token")]
    pub access_token: BearerToken,
    pub user_type: UserType,
    #[serde(deserialize_with = "expiry")]
    pub expiry: Timestamp,
}

impl AuthSession {
    pub fn parse(record: &str) -> Result<Self, AuthError> {
        serde_json::from_str(record).map_err(|_| AuthError::Unreadable)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiry <= now
    }
}

fn token<'de, D: Deserializer<'de>>(d: D) -> Result<BearerToken, D::Error> {
    let raw = String::deserialize(d)?;
    if raw.trim().is_empty() {
        return Err(serde::de::Error::custom("empty access token"));
    }
    Ok(BearerToken::new(raw))
}

/// The record has been written both as an RFC 3339 string and as epoch
/// milliseconds; accept either.
fn expiry<'de, D: Deserializer<'de>>(d: D) -> Result<Timestamp, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    match Raw::deserialize(d)? {
        Raw::Millis(ms) => {
            Timestamp::from_millisecond(ms).map_err(serde::de::Error::custom)
        }
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

/// The single place that turns persisted state into request credentials.
pub struct AuthAccessor<S> {
    reader: S,
}

impl<S: SessionReader> AuthAccessor<S> {
    pub fn new(reader: S) -> Self {
        Self { reader }
    }

    pub fn session(&self, now: Timestamp) -> Result<AuthSession, AuthError> {
        let record = self.reader.read_record().ok_or(AuthError::Missing)?;
        let session = AuthSession::parse(&record)?;
        if session.is_expired(now) {
            tracing::debug!(expiry = %session.expiry, "auth session expired");
            return Err(AuthError::Expired);
        }
        Ok(session)
    }

    pub fn bearer(&self, now: Timestamp) -> Result<BearerToken, AuthError> {
        self.session(now).map(|session| session.access_token)
    }
}
