//! In-memory state of the mock backend.
//!
//! Collections hold raw JSON documents so partial or oddly shaped records
//! can be seeded exactly as a real backend might return them. Faults queued
//! per collection are consumed by the next request touching it.

use jiff::{SignedDuration, Timestamp};
use payloads::{EntityId, ModerationStatus, UserType};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use uuid::Uuid;

use crate::time::TimeSource;

/// How long issued access tokens stay valid.
pub const TOKEN_TTL: SignedDuration = SignedDuration::from_hours(1);

/// Collections served under `/api/admin/`.
pub const COLLECTIONS: [&str; 7] = [
    "alumni",
    "students",
    "jobs",
    "events",
    "blogs",
    "mentorships",
    "pending-requests",
];

/// Name of the property holding the list in a collection's response.
pub fn list_field(collection: &str) -> &'static str {
    match collection {
        "alumni" => "alumni",
        "students" => "students",
        "jobs" => "jobs",
        "events" => "events",
        "blogs" => "blogs",
        "mentorships" => "requests",
        _ => "data",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown collection")]
    UnknownCollection,
    #[error("Record not found")]
    NotFound,
    #[error("This request has already been reviewed")]
    AlreadyReviewed,
    #[error("Status `{0}` cannot be set here")]
    InvalidStatus(ModerationStatus),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Missing or invalid access token")]
    InvalidToken,
    #[error("Administrator access required")]
    Forbidden,
}

/// A scripted misbehaviour for the next request on a collection.
#[derive(Debug, Clone)]
pub enum Fault {
    /// Answer with this HTTP status and a JSON `message`.
    Status(u16, String),
    /// Answer 200 with `{ "success": false, "message": ... }`.
    Envelope(String),
    /// Answer 200 with a body that is not JSON.
    Malformed,
    /// Handle the request, then wait this long before answering.
    Delay(Duration),
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: String,
    user_type: UserType,
}

#[derive(Debug, Clone)]
struct Session {
    user_type: UserType,
    expiry: Timestamp,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    accounts: Vec<Account>,
    sessions: HashMap<String, Session>,
    faults: HashMap<String, VecDeque<Fault>>,
    requests: HashMap<String, usize>,
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
    time_source: TimeSource,
}

impl Store {
    pub fn new(time_source: TimeSource) -> Self {
        let mut inner = Inner::default();
        for collection in COLLECTIONS {
            inner.collections.insert(collection.to_string(), Vec::new());
        }
        Self {
            inner: Arc::new(Mutex::new(inner)),
            time_source,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic while holding the lock leaves plain data behind
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn time_source(&self) -> &TimeSource {
        &self.time_source
    }

    /// Replace the documents of a collection.
    pub fn seed(&self, collection: &str, documents: Vec<Value>) {
        self.lock()
            .collections
            .insert(collection.to_string(), documents);
    }

    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) {
        self.lock().accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            user_type,
        });
    }

    /// Issue a token directly, bypassing the login route.
    pub fn issue_token(&self, user_type: UserType) -> (String, Timestamp) {
        let token = Uuid::new_v4().to_string();
        let expiry = self.time_source.now() + TOKEN_TTL;
        self.lock()
            .sessions
            .insert(token.clone(), Session { user_type, expiry });
        (token, expiry)
    }

    pub fn login(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<(String, Timestamp), StoreError> {
        let known = self.lock().accounts.iter().any(|a| {
            a.email.eq_ignore_ascii_case(email)
                && a.password == password
                && a.user_type == user_type
        });
        if !known {
            return Err(StoreError::InvalidCredentials);
        }
        Ok(self.issue_token(user_type))
    }

    /// Validate a bearer token for an admin route.
    pub fn authorize_admin(
        &self,
        token: Option<&str>,
    ) -> Result<(), StoreError> {
        let token = token.ok_or(StoreError::InvalidToken)?;
        let now = self.time_source.now();
        let inner = self.lock();
        let session =
            inner.sessions.get(token).ok_or(StoreError::InvalidToken)?;
        if session.expiry <= now {
            return Err(StoreError::InvalidToken);
        }
        if session.user_type != UserType::Admin {
            return Err(StoreError::Forbidden);
        }
        Ok(())
    }

    pub fn push_fault(&self, collection: &str, fault: Fault) {
        self.lock()
            .faults
            .entry(collection.to_string())
            .or_default()
            .push_back(fault);
    }

    /// Record a request against a collection and return the fault queued
    /// for it, if any.
    pub fn take_fault(&self, collection: &str) -> Option<Fault> {
        let mut inner = self.lock();
        *inner.requests.entry(collection.to_string()).or_default() += 1;
        inner.faults.get_mut(collection)?.pop_front()
    }

    /// Number of requests that reached a collection.
    pub fn request_count(&self, collection: &str) -> usize {
        self.lock().requests.get(collection).copied().unwrap_or(0)
    }

    pub fn list(
        &self,
        collection: &str,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<Value>, StoreError> {
        let inner = self.lock();
        let documents = inner
            .collections
            .get(collection)
            .ok_or(StoreError::UnknownCollection)?;
        // signups waiting for review are the only thing this endpoint shows
        let status = if collection == "pending-requests" {
            Some(ModerationStatus::Pending)
        } else {
            status
        };
        Ok(documents
            .iter()
            .filter(|doc| status.is_none_or(|s| status_of(doc) == s))
            .cloned()
            .collect())
    }

    /// Snapshot of one document, for assertions.
    pub fn get(&self, collection: &str, id: &EntityId) -> Option<Value> {
        self.lock()
            .collections
            .get(collection)?
            .iter()
            .find(|doc| id_of(doc).as_deref() == Some(id.0.as_str()))
            .cloned()
    }

    /// Approve or reject a pending document.
    pub fn review(
        &self,
        collection: &str,
        id: &EntityId,
        status: ModerationStatus,
    ) -> Result<(), StoreError> {
        self.update(collection, id, |doc| {
            if status_of(doc) != ModerationStatus::Pending {
                return Err(StoreError::AlreadyReviewed);
            }
            set_status(doc, status);
            Ok(())
        })
    }

    pub fn set_status(
        &self,
        collection: &str,
        id: &EntityId,
        status: ModerationStatus,
    ) -> Result<(), StoreError> {
        if !matches!(
            status,
            ModerationStatus::Active | ModerationStatus::Inactive
        ) {
            return Err(StoreError::InvalidStatus(status));
        }
        self.update(collection, id, |doc| {
            set_status(doc, status);
            Ok(())
        })
    }

    pub fn delete(
        &self,
        collection: &str,
        id: &EntityId,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let documents = inner
            .collections
            .get_mut(collection)
            .ok_or(StoreError::UnknownCollection)?;
        let before = documents.len();
        documents
            .retain(|doc| id_of(doc).as_deref() != Some(id.0.as_str()));
        if documents.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn update(
        &self,
        collection: &str,
        id: &EntityId,
        f: impl FnOnce(&mut Value) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let documents = inner
            .collections
            .get_mut(collection)
            .ok_or(StoreError::UnknownCollection)?;
        let doc = documents
            .iter_mut()
            .find(|doc| id_of(doc).as_deref() == Some(id.0.as_str()))
            .ok_or(StoreError::NotFound)?;
        f(doc)
    }
}

fn id_of(doc: &Value) -> Option<String> {
    match doc.get("id").or_else(|| doc.get("_id"))? {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn status_of(doc: &Value) -> ModerationStatus {
    doc.get("status")
        .and_then(Value::as_str)
        .and_then(ModerationStatus::parse)
        .unwrap_or_default()
}

fn set_status(doc: &mut Value, status: ModerationStatus) {
    if let Value::Object(map) = doc {
        map.insert("status".to_string(), Value::String(status.to_string()));
    }
}
