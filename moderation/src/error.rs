use payloads::ClientError;

use crate::auth::AuthError;

/// Failure of a fetch or an action, classified by how the screen reacts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// Credentials missing, expired or refused. The user must sign in again.
    #[error("{0}")]
    Unauthorized(String),
    /// The server refused the request; its message is shown verbatim next
    /// to the action that triggered it.
    #[error("{0}")]
    Rejected(String),
    /// Transport failure, timeout or an unexpected response. Prior state is
    /// kept and the user may retry.
    #[error("{0}")]
    Transient(String),
}

impl ControllerError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<ClientError> for ControllerError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Unauthorized(_) => ControllerError::Unauthorized(
                "Your session is no longer valid. Please sign in again."
                    .to_string(),
            ),
            ClientError::Rejected { message, .. } => {
                ControllerError::Rejected(message)
            }
            e @ (ClientError::Malformed(_)
            | ClientError::Unavailable(_)
            | ClientError::Timeout
            | ClientError::Network(_)) => {
                ControllerError::Transient(e.to_string())
            }
        }
    }
}

impl From<AuthError> for ControllerError {
    fn from(e: AuthError) -> Self {
        ControllerError::Unauthorized(e.to_string())
    }
}
