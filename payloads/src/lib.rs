pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier assigned by the backend. Stable for the lifetime of the
/// entity; never parsed or generated by the client.
///
/// Backends hand out both string and integer ids. Either is accepted and
/// kept as text.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
        })
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Moderation status of an entity. Every entity is created server-side as
/// `Pending`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
    #[display("active")]
    Active,
    #[display("inactive")]
    Inactive,
    #[display("rejected")]
    Rejected,
}

impl ModerationStatus {
    pub const ALL: [ModerationStatus; 5] = [
        Self::Pending,
        Self::Approved,
        Self::Active,
        Self::Inactive,
        Self::Rejected,
    ];

    /// Human readable label for badges and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// The kinds of records managed by the admin moderation screens.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[display("alumni")]
    Alumni,
    #[display("student")]
    Student,
    #[display("job")]
    Job,
    #[display("event")]
    Event,
    #[display("blog")]
    Blog,
    #[display("mentorship")]
    Mentorship,
    #[display("registration")]
    Registration,
}

impl EntityKind {
    /// Plural noun used in headings and loading messages.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Student => "students",
            Self::Job => "jobs",
            Self::Event => "events",
            Self::Blog => "blogs",
            Self::Mentorship => "mentorship requests",
            Self::Registration => "pending requests",
        }
    }
}

/// Role recorded in the persisted auth session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[display("admin")]
    Admin,
    #[display("alumni")]
    Alumni,
    #[display("student")]
    Student,
}

/// Access token attached to every admin request as
/// `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}
