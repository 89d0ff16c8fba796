use jiff::Timestamp;
use payloads::UserType;
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(AuthSnapshot),
}

/// What the shell needs to know about the stored session. The token itself
/// stays in storage and is only read when a request is made.
#[derive(Clone, PartialEq, Debug)]
pub struct AuthSnapshot {
    pub user_type: UserType,
    pub expiry: Timestamp,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    /// Order of the toggle button.
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub theme_mode: ThemeMode,
    pub system_prefers_dark: bool,
    pub auth_state: AuthState,
    /// Signups waiting for review, shown on the dashboard and sidebar.
    pub pending_registrations: Option<usize>,
}

impl State {
    pub fn is_dark_mode(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_prefers_dark,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            &self.auth_state,
            AuthState::LoggedIn(AuthSnapshot {
                user_type: UserType::Admin,
                ..
            })
        )
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.pending_registrations = None;
    }
}
