use payloads::{
    EntityKind, ModerationStatus,
    requests::{ActionVerb, ModerationRequest},
};
use reqwest::Method;

use crate::filter::StatusTab;

/// An action an administrator can take on one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
    Delete,
    SetStatus(ModerationStatus),
}

impl ModerationAction {
    /// The status the entity has once the server confirms the action, or
    /// `None` if the action removes it.
    pub fn resulting_status(&self) -> Option<ModerationStatus> {
        match self {
            Self::Approve => Some(ModerationStatus::Approved),
            Self::Reject => Some(ModerationStatus::Rejected),
            Self::SetStatus(status) => Some(*status),
            Self::Delete => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Approve => "Approve".to_string(),
            Self::Reject => "Reject".to_string(),
            Self::Delete => "Delete".to_string(),
            Self::SetStatus(status) => format!("Mark {}", status.label()),
        }
    }

    /// Past tense used in success notifications.
    pub fn past_tense(&self) -> String {
        match self {
            Self::Approve => "approved".to_string(),
            Self::Reject => "rejected".to_string(),
            Self::Delete => "deleted".to_string(),
            Self::SetStatus(status) => format!("marked {}", status),
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// How the body of a mutation is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStyle {
    /// `{ "action": "approve" }`
    Action,
    /// `{ "status": "approved" }`
    Status,
}

/// `<method> <collection>/<id>/<path>` for one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRoute {
    pub method: Method,
    pub path: &'static str,
    pub body: BodyStyle,
}

impl ActionRoute {
    pub fn patch(path: &'static str, body: BodyStyle) -> Self {
        Self {
            method: Method::PATCH,
            path,
            body,
        }
    }

    pub fn put(path: &'static str, body: BodyStyle) -> Self {
        Self {
            method: Method::PUT,
            path,
            body,
        }
    }
}

/// Where and how one entity kind is fetched and moderated.
///
/// Each admin screen is the same controller parameterized by one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub kind: EntityKind,
    /// Path below `/api/`, e.g. `admin/alumni`.
    pub collection: &'static str,
    /// Property of the list response holding the array.
    pub list_field: &'static str,
    /// Tabs offered by the screen, first is the default.
    pub tabs: Vec<StatusTab>,
    pub approve: Option<ActionRoute>,
    pub reject: Option<ActionRoute>,
    pub set_status: Option<ActionRoute>,
    /// Statuses offered through `set_status`.
    pub settable: Vec<ModerationStatus>,
    pub delete: bool,
}

impl EndpointConfig {
    fn approval(kind: EntityKind, collection: &'static str) -> Self {
        use ModerationStatus::*;
        Self {
            kind,
            collection,
            list_field: "data",
            tabs: vec![
                StatusTab::Only(Pending),
                StatusTab::Only(Approved),
                StatusTab::Only(Rejected),
                StatusTab::All,
            ],
            approve: Some(ActionRoute::patch("approve", BodyStyle::Action)),
            reject: Some(ActionRoute::patch("reject", BodyStyle::Action)),
            set_status: None,
            settable: Vec::new(),
            delete: true,
        }
    }

    pub fn alumni() -> Self {
        Self {
            list_field: "alumni",
            ..Self::approval(EntityKind::Alumni, "admin/alumni")
        }
    }

    pub fn students() -> Self {
        use ModerationStatus::*;
        Self {
            list_field: "students",
            tabs: vec![StatusTab::All],
            approve: None,
            reject: None,
            set_status: Some(ActionRoute::put("status", BodyStyle::Status)),
            settable: vec![Active, Inactive],
            ..Self::approval(EntityKind::Student, "admin/students")
        }
    }

    pub fn jobs() -> Self {
        use ModerationStatus::*;
        Self {
            list_field: "jobs",
            tabs: vec![
                StatusTab::Only(Pending),
                StatusTab::Only(Approved),
                StatusTab::Only(Active),
                StatusTab::Only(Inactive),
                StatusTab::Only(Rejected),
                StatusTab::All,
            ],
            set_status: Some(ActionRoute::put("status", BodyStyle::Status)),
            settable: vec![Active, Inactive],
            ..Self::approval(EntityKind::Job, "admin/jobs")
        }
    }

    pub fn events() -> Self {
        Self {
            list_field: "events",
            ..Self::approval(EntityKind::Event, "admin/events")
        }
    }

    pub fn blogs() -> Self {
        Self {
            list_field: "blogs",
            ..Self::approval(EntityKind::Blog, "admin/blogs")
        }
    }

    pub fn mentorship() -> Self {
        Self {
            list_field: "requests",
            ..Self::approval(EntityKind::Mentorship, "admin/mentorships")
        }
    }

    /// Signups waiting for approval. The endpoint only ever returns pending
    /// requests, so approved or rejected ones leave the list.
    pub fn registrations() -> Self {
        Self {
            tabs: vec![StatusTab::Only(ModerationStatus::Pending)],
            delete: false,
            ..Self::approval(EntityKind::Registration, "admin/pending-requests")
        }
    }

    pub fn default_tab(&self) -> StatusTab {
        self.tabs.first().copied().unwrap_or_default()
    }

    pub fn supports(&self, action: &ModerationAction) -> bool {
        match action {
            ModerationAction::Approve => self.approve.is_some(),
            ModerationAction::Reject => self.reject.is_some(),
            ModerationAction::Delete => self.delete,
            ModerationAction::SetStatus(status) => {
                self.set_status.is_some() && self.settable.contains(status)
            }
        }
    }

    /// Actions offered for an entity currently in `status`.
    pub fn actions_for(
        &self,
        status: ModerationStatus,
    ) -> Vec<ModerationAction> {
        let mut actions = Vec::new();
        if self.approve.is_some() && status == ModerationStatus::Pending {
            actions.push(ModerationAction::Approve);
        }
        if self.reject.is_some() && status == ModerationStatus::Pending {
            actions.push(ModerationAction::Reject);
        }
        if self.set_status.is_some() {
            actions.extend(
                self.settable
                    .iter()
                    .filter(|s| **s != status)
                    .map(|s| ModerationAction::SetStatus(*s)),
            );
        }
        if self.delete {
            actions.push(ModerationAction::Delete);
        }
        actions
    }

    /// Route and body of a non-delete mutation.
    pub fn mutation(
        &self,
        action: &ModerationAction,
    ) -> Option<(&ActionRoute, ModerationRequest)> {
        let (route, verb, status) = match action {
            ModerationAction::Approve => (
                self.approve.as_ref()?,
                ActionVerb::Approve,
                ModerationStatus::Approved,
            ),
            ModerationAction::Reject => (
                self.reject.as_ref()?,
                ActionVerb::Reject,
                ModerationStatus::Rejected,
            ),
            ModerationAction::SetStatus(status) => {
                let route = self.set_status.as_ref()?;
                let body = ModerationRequest::Status { status: *status };
                return Some((route, body));
            }
            ModerationAction::Delete => return None,
        };
        let body = match route.body {
            BodyStyle::Action => ModerationRequest::Action { action: verb },
            BodyStyle::Status => ModerationRequest::Status { status },
        };
        Some((route, body))
    }
}
