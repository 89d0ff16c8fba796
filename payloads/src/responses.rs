use crate::{EntityId, ModerationStatus, UserType};
use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// An alumni profile awaiting or past moderation.
///
/// Everything besides the id is optional on the wire: the list endpoints of
/// the backend return partial documents, and a missing field must never
/// fail the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub batch: Option<u16>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub profile: Option<Profile>,
}

/// Extended profile shown only in the detail view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub bio: Option<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub links: Option<ContactLinks>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<u16>,
    pub end_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_year: Option<u16>,
    pub end_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub batch: Option<u16>,
    pub enrollment_number: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub posted_by: Option<String>,
    pub apply_link: Option<String>,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRequest {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    pub mentor_name: Option<String>,
    #[serde(default)]
    pub mentee_name: String,
    pub mentee_email: Option<String>,
    pub topic: Option<String>,
    pub message: Option<String>,
}

/// A signup waiting for an administrator's approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub status: ModerationStatus,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub user_type: Option<UserType>,
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub batch: Option<u16>,
    pub submitted_at: Option<Timestamp>,
}

/// Envelope returned by mutation endpoints. Both fields are optional since
/// some endpoints answer with a bare status code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionEnvelope {
    pub success: Option<bool>,
    pub message: Option<String>,
}

/// Result of a successful login. The UI persists this as the auth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user_type: UserType,
    pub expiry: Timestamp,
}

/// Graduation years arrive as numbers from some forms and as strings from
/// others. Text that is not a year reads as absent.
fn number_or_text<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(u16),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(year)) => Some(year),
        Some(RawYear::Text(text)) => text.trim().parse().ok(),
        Some(RawYear::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_ids_are_kept_as_text() {
        let alumni: Alumni =
            serde_json::from_value(json!({ "id": 1, "name": "A" })).unwrap();
        assert_eq!(alumni.id, EntityId::from("1"));
        assert_eq!(alumni.status, ModerationStatus::Pending);

        let job: Job =
            serde_json::from_value(json!({ "_id": 42, "title": "SDE" }))
                .unwrap();
        assert_eq!(job.id, EntityId::from("42"));
    }

    #[test]
    fn batch_reads_numbers_and_numeric_text() {
        let alumni: Alumni = serde_json::from_value(json!({
            "_id": "A",
            "batch": "2019",
        }))
        .unwrap();
        assert_eq!(alumni.batch, Some(2019));

        let student: Student = serde_json::from_value(json!({
            "_id": "S",
            "batch": 2021,
        }))
        .unwrap();
        assert_eq!(student.batch, Some(2021));

        let request: RegistrationRequest = serde_json::from_value(json!({
            "_id": "R",
            "batch": "final year",
        }))
        .unwrap();
        assert_eq!(request.batch, None);

        let absent: Alumni =
            serde_json::from_value(json!({ "_id": "B", "batch": null }))
                .unwrap();
        assert_eq!(absent.batch, None);
    }
}
