//! Browser side of the auth session: the `localStorage` record the login
//! page writes and every moderation screen reads.

use jiff::Timestamp;
use moderation::{AuthAccessor, AuthSession, SessionReader, auth::SESSION_KEY};
use payloads::responses::LoginResponse;
use serde_json::json;
use web_sys::Storage;

use crate::state::AuthSnapshot;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Reads the persisted session record on every request.
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionReader for BrowserSession {
    fn read_record(&self) -> Option<String> {
        local_storage()?.get_item(SESSION_KEY).ok()?
    }
}

pub fn accessor() -> AuthAccessor<BrowserSession> {
    AuthAccessor::new(BrowserSession)
}

/// The current session, if one is stored and still valid.
pub fn current_session() -> Option<AuthSession> {
    accessor().session(Timestamp::now()).ok()
}

pub fn snapshot(session: &AuthSession) -> AuthSnapshot {
    AuthSnapshot {
        user_type: session.user_type,
        expiry: session.expiry,
    }
}

/// Store the record for a successful login. Only the login page calls this.
pub fn persist(response: &LoginResponse) -> Result<(), String> {
    let record = json!({
        "accessToken": response.access_token,
        "userType": response.user_type,
        "expiry": response.expiry.to_string(),
    });
    local_storage()
        .ok_or_else(|| "Browser storage is unavailable".to_string())?
        .set_item(SESSION_KEY, &record.to_string())
        .map_err(|_| "Could not save the session".to_string())
}

/// Forget the stored session.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
