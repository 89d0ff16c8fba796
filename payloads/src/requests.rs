use crate::{ModerationStatus, UserType};
use serde::{Deserialize, Serialize};

/// Verb carried in the body of approve/reject mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVerb {
    Approve,
    Reject,
}

/// JSON body of a moderation mutation: either `{ "action": "approve" }` or
/// `{ "status": "active" }` depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModerationRequest {
    Action { action: ActionVerb },
    Status { status: ModerationStatus },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("user_type", &self.user_type)
            .finish_non_exhaustive()
    }
}

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validate login input before it is sent, returning a message to display.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    if email.len() > EMAIL_MAX_LEN || !email.contains('@') {
        return Err("Please enter a valid email address");
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}
