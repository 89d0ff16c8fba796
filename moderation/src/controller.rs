//! State of one moderation screen.
//!
//! The controller never performs I/O. Every request goes through a ticket:
//! `begin_*` records that a request was issued and `finish_*` folds its
//! result back in. Tickets let the controller discard stale fetches, keep
//! one in-flight marker per entity, and ignore anything that resolves after
//! the screen went away.

use payloads::{EntityId, ModerationStatus};
use std::collections::{BTreeSet, HashMap};

use crate::{
    endpoint::{EndpointConfig, ModerationAction},
    entity::Moderated,
    error::ControllerError,
    filter::{self, FilterState, StatusTab},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    epoch: u64,
    tab: StatusTab,
}

impl FetchTicket {
    /// The tab whose contents were requested.
    pub fn tab(&self) -> StatusTab {
        self.tab
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTicket {
    id: EntityId,
    action: ModerationAction,
    epoch: u64,
}

impl ActionTicket {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn action(&self) -> ModerationAction {
        self.action
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    Failed(ControllerError),
    /// A newer fetch already resolved; this result was dropped.
    Stale,
    /// The screen was detached before the fetch resolved.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionRefused {
    #[error("This action is not available here")]
    Unsupported,
    #[error("This item is no longer listed")]
    NotListed,
    #[error("An action on this item is already in progress")]
    InFlight,
}

/// Local consequence of a confirmed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Removed,
    Status(ModerationStatus),
}

/// A server-confirmed action, shareable with every list tracking the same
/// kind of entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub id: EntityId,
    pub action: ModerationAction,
    pub effect: Effect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Confirmed(Confirmation),
    Failed(ControllerError),
    Detached,
}

/// A confirmed effect that fetches issued at or before `issued_through`
/// cannot know about yet.
#[derive(Debug, Clone, Copy)]
struct Reconciled {
    effect: Effect,
    issued_through: u64,
}

pub struct ListController<E> {
    config: EndpointConfig,
    items: Vec<E>,
    fetched: bool,
    filter: FilterState,
    issued_seq: u64,
    applied_seq: u64,
    running: BTreeSet<u64>,
    epoch: u64,
    error: Option<ControllerError>,
    in_flight: HashMap<EntityId, ModerationAction>,
    row_errors: HashMap<EntityId, String>,
    confirmed: HashMap<EntityId, Reconciled>,
    selected: Option<EntityId>,
}

impl<E: Moderated> ListController<E> {
    pub fn new(config: EndpointConfig) -> Self {
        let filter = FilterState {
            tab: config.default_tab(),
            ..FilterState::default()
        };
        Self {
            config,
            items: Vec::new(),
            fetched: false,
            filter,
            issued_seq: 0,
            applied_seq: 0,
            running: BTreeSet::new(),
            epoch: 0,
            error: None,
            in_flight: HashMap::new(),
            row_errors: HashMap::new(),
            confirmed: HashMap::new(),
            selected: None,
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// The whole collection in server order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The collection narrowed by the current filter.
    pub fn visible(&self) -> Vec<&E> {
        filter::apply(&self.items, &self.filter)
    }

    /// True once any fetch has succeeded.
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// True while the most recently issued fetch is unresolved.
    pub fn is_loading(&self) -> bool {
        self.running.contains(&self.issued_seq)
    }

    pub fn error(&self) -> Option<&ControllerError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, query: String) {
        self.filter.query = query;
    }

    pub fn set_facet(&mut self, key: &str, value: String) {
        self.filter.set_facet(key, value);
    }

    pub fn clear_filters(&mut self) {
        self.filter.query.clear();
        self.filter.facets.clear();
    }

    /// Switch tabs. Returns true when the tab changed and the collection
    /// should be refetched for it.
    pub fn set_tab(&mut self, tab: StatusTab) -> bool {
        if self.filter.tab == tab {
            return false;
        }
        self.filter.tab = tab;
        true
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        self.running.insert(self.issued_seq);
        FetchTicket {
            seq: self.issued_seq,
            epoch: self.epoch,
            tab: self.filter.tab,
        }
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<E>, ControllerError>,
    ) -> FetchOutcome {
        if ticket.epoch != self.epoch {
            return FetchOutcome::Detached;
        }
        self.running.remove(&ticket.seq);
        if ticket.seq < self.applied_seq {
            tracing::debug!(
                kind = %self.config.kind,
                seq = ticket.seq,
                applied = self.applied_seq,
                "discarding stale fetch"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.applied_seq = ticket.seq;
                self.items = self.reconcile(items, &ticket);
                self.confirmed
                    .retain(|_, rec| rec.issued_through >= ticket.seq);
                self.fetched = true;
                self.error = None;
                if let Some(id) = &self.selected
                    && !self.contains(id)
                {
                    self.selected = None;
                }
                FetchOutcome::Applied {
                    count: self.items.len(),
                }
            }
            Err(e) => {
                tracing::warn!(kind = %self.config.kind, "fetch failed: {e}");
                self.error = Some(e.clone());
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Re-apply effects the server confirmed after this fetch was issued, so
    /// an old response cannot resurrect a deleted or moved entity.
    fn reconcile(&self, items: Vec<E>, ticket: &FetchTicket) -> Vec<E> {
        items
            .into_iter()
            .filter_map(|mut item| {
                let Some(rec) = self.confirmed.get(item.id()) else {
                    return Some(item);
                };
                if rec.issued_through < ticket.seq {
                    return Some(item);
                }
                match rec.effect {
                    Effect::Removed => None,
                    Effect::Status(status) => {
                        item.set_status(status);
                        ticket.tab.admits(status).then_some(item)
                    }
                }
            })
            .collect()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn begin_action(
        &mut self,
        id: &EntityId,
        action: ModerationAction,
    ) -> Result<ActionTicket, ActionRefused> {
        if !self.config.supports(&action) {
            return Err(ActionRefused::Unsupported);
        }
        if !self.contains(id) {
            return Err(ActionRefused::NotListed);
        }
        if self.in_flight.contains_key(id) {
            return Err(ActionRefused::InFlight);
        }
        self.in_flight.insert(id.clone(), action);
        self.row_errors.remove(id);
        Ok(ActionTicket {
            id: id.clone(),
            action,
            epoch: self.epoch,
        })
    }

    pub fn finish_action(
        &mut self,
        ticket: ActionTicket,
        result: Result<(), ControllerError>,
    ) -> ActionOutcome {
        if ticket.epoch != self.epoch {
            return ActionOutcome::Detached;
        }
        self.in_flight.remove(&ticket.id);

        match result {
            Ok(()) => {
                let effect = match ticket.action.resulting_status() {
                    Some(status) => Effect::Status(status),
                    None => Effect::Removed,
                };
                let confirmation = Confirmation {
                    id: ticket.id,
                    action: ticket.action,
                    effect,
                };
                self.absorb(&confirmation);
                ActionOutcome::Confirmed(confirmation)
            }
            Err(e) => {
                tracing::warn!(
                    kind = %self.config.kind,
                    id = %ticket.id,
                    action = ?ticket.action,
                    "action failed: {e}"
                );
                if let ControllerError::Rejected(message) = &e {
                    self.row_errors.insert(ticket.id, message.clone());
                }
                ActionOutcome::Failed(e)
            }
        }
    }

    /// Apply a confirmed action, whether it was dispatched from this list or
    /// from another list of the same kind.
    pub fn absorb(&mut self, confirmation: &Confirmation) {
        let id = &confirmation.id;
        let removed = match confirmation.effect {
            Effect::Removed => true,
            Effect::Status(status) => !self.filter.tab.admits(status),
        };

        if removed {
            self.items.retain(|item| item.id() != id);
            self.row_errors.remove(id);
            if self.selected.as_ref() == Some(id) {
                self.selected = None;
            }
        } else if let Effect::Status(status) = confirmation.effect
            && let Some(item) =
                self.items.iter_mut().find(|item| item.id() == id)
        {
            item.set_status(status);
        }

        self.confirmed.insert(
            id.clone(),
            Reconciled {
                effect: confirmation.effect,
                issued_through: self.issued_seq,
            },
        );
    }

    pub fn is_in_flight(&self, id: &EntityId) -> bool {
        self.in_flight.contains_key(id)
    }

    pub fn in_flight_action(&self, id: &EntityId) -> Option<ModerationAction> {
        self.in_flight.get(id).copied()
    }

    /// Server message of the last failed action on this row.
    pub fn row_error(&self, id: &EntityId) -> Option<&str> {
        self.row_errors.get(id).map(String::as_str)
    }

    pub fn dismiss_row_error(&mut self, id: &EntityId) {
        self.row_errors.remove(id);
    }

    /// Open the detail view for a listed entity.
    pub fn select(&mut self, id: &EntityId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Stop accepting results for anything issued so far. Called when the
    /// screen unmounts or navigates away.
    pub fn detach(&mut self) {
        self.epoch += 1;
        self.running.clear();
        self.in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::responses::Alumni;

    fn alumni(id: &str, name: &str, status: ModerationStatus) -> Alumni {
        Alumni {
            id: EntityId::from(id),
            status,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            branch: None,
            batch: None,
            location: None,
            company: None,
            designation: None,
            profile: None,
        }
    }

    fn pending_pair() -> Vec<Alumni> {
        vec![
            alumni("1", "A", ModerationStatus::Pending),
            alumni("2", "B", ModerationStatus::Pending),
        ]
    }

    fn loaded(items: Vec<Alumni>) -> ListController<Alumni> {
        let mut list = ListController::new(EndpointConfig::alumni());
        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Ok(items));
        list
    }

    fn ids(list: &ListController<Alumni>) -> Vec<&str> {
        list.items().iter().map(|a| a.id.0.as_str()).collect()
    }

    fn id(value: &str) -> EntityId {
        EntityId::from(value)
    }

    #[test]
    fn loading_spans_the_latest_fetch() {
        let mut list = ListController::<Alumni>::new(EndpointConfig::alumni());
        assert!(!list.is_loading());
        let ticket = list.begin_fetch();
        assert!(list.is_loading());
        list.finish_fetch(ticket, Ok(pending_pair()));
        assert!(!list.is_loading());
        assert!(list.is_fetched());
    }

    #[test]
    fn approving_on_pending_tab_removes_the_row() {
        let mut list = loaded(pending_pair());
        let ticket = list
            .begin_action(&id("1"), ModerationAction::Approve)
            .unwrap();
        let outcome = list.finish_action(ticket, Ok(()));
        assert!(matches!(outcome, ActionOutcome::Confirmed(_)));
        assert_eq!(ids(&list), ["2"]);
    }

    #[test]
    fn approving_on_all_tab_updates_in_place() {
        let mut list = loaded(pending_pair());
        list.set_tab(StatusTab::All);
        let ticket = list
            .begin_action(&id("1"), ModerationAction::Approve)
            .unwrap();
        list.finish_action(ticket, Ok(()));
        assert_eq!(ids(&list), ["1", "2"]);
        assert_eq!(list.items()[0].status, ModerationStatus::Approved);
    }

    #[test]
    fn no_optimistic_change_before_confirmation() {
        let mut list = loaded(pending_pair());
        let ticket = list
            .begin_action(&id("1"), ModerationAction::Delete)
            .unwrap();
        assert!(list.is_in_flight(&id("1")));
        assert_eq!(ids(&list), ["1", "2"]);
        list.finish_action(ticket, Ok(()));
        assert!(!list.is_in_flight(&id("1")));
        assert_eq!(ids(&list), ["2"]);
    }

    #[test]
    fn failed_action_leaves_state_unchanged() {
        let mut list = loaded(pending_pair());
        let before = list.items().to_vec();
        let ticket = list
            .begin_action(&id("1"), ModerationAction::Reject)
            .unwrap();
        let outcome = list.finish_action(
            ticket,
            Err(ControllerError::Rejected("Already reviewed".to_string())),
        );
        assert!(matches!(outcome, ActionOutcome::Failed(_)));
        assert_eq!(list.items(), before.as_slice());
        assert!(!list.is_in_flight(&id("1")));
        assert_eq!(list.row_error(&id("1")), Some("Already reviewed"));

        // retrying clears the row error
        let _ticket = list
            .begin_action(&id("1"), ModerationAction::Reject)
            .unwrap();
        assert_eq!(list.row_error(&id("1")), None);
    }

    #[test]
    fn in_flight_marker_is_per_entity() {
        let mut list = loaded(pending_pair());
        let first = list
            .begin_action(&id("1"), ModerationAction::Approve)
            .unwrap();
        assert_eq!(
            list.begin_action(&id("1"), ModerationAction::Reject),
            Err(ActionRefused::InFlight)
        );
        let second = list
            .begin_action(&id("2"), ModerationAction::Reject)
            .unwrap();

        list.finish_action(second, Ok(()));
        assert!(list.is_in_flight(&id("1")));
        assert_eq!(ids(&list), ["1"]);
        assert_eq!(list.items()[0].status, ModerationStatus::Pending);

        list.finish_action(first, Ok(()));
        assert!(list.items().is_empty());
    }

    #[test]
    fn unsupported_and_unlisted_actions_are_refused() {
        let mut list = loaded(pending_pair());
        assert_eq!(
            list.begin_action(
                &id("1"),
                ModerationAction::SetStatus(ModerationStatus::Active)
            ),
            Err(ActionRefused::Unsupported)
        );
        assert_eq!(
            list.begin_action(&id("9"), ModerationAction::Approve),
            Err(ActionRefused::NotListed)
        );
    }

    #[test]
    fn fetch_failure_keeps_previous_collection() {
        let mut list = loaded(vec![
            alumni("1", "A", ModerationStatus::Pending),
            alumni("2", "B", ModerationStatus::Pending),
            alumni("3", "C", ModerationStatus::Pending),
        ]);
        let ticket = list.begin_fetch();
        let outcome = list.finish_fetch(
            ticket,
            Err(ControllerError::Transient("Network error".to_string())),
        );
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(ids(&list), ["1", "2", "3"]);
        assert!(list.error().is_some_and(ControllerError::is_transient));
        assert!(!list.is_loading());
    }

    #[test]
    fn older_fetch_resolving_late_is_discarded() {
        let mut list = ListController::<Alumni>::new(EndpointConfig::alumni());
        let older = list.begin_fetch();
        let newer = list.begin_fetch();

        let outcome = list.finish_fetch(
            newer,
            Ok(vec![alumni("2", "B", ModerationStatus::Pending)]),
        );
        assert_eq!(outcome, FetchOutcome::Applied { count: 1 });

        let outcome = list.finish_fetch(older, Ok(pending_pair()));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(ids(&list), ["2"]);
    }

    #[test]
    fn loading_follows_the_newest_ticket() {
        let mut list = ListController::<Alumni>::new(EndpointConfig::alumni());
        let older = list.begin_fetch();
        let newer = list.begin_fetch();
        list.finish_fetch(older, Ok(pending_pair()));
        assert!(list.is_loading());
        list.finish_fetch(newer, Ok(pending_pair()));
        assert!(!list.is_loading());
    }

    #[test]
    fn fetch_issued_before_delete_cannot_resurrect_it() {
        let mut list = loaded(pending_pair());
        let in_flight_fetch = list.begin_fetch();
        let delete = list
            .begin_action(&id("1"), ModerationAction::Delete)
            .unwrap();
        list.finish_action(delete, Ok(()));

        // the fetch was answered before the delete reached the server
        list.finish_fetch(in_flight_fetch, Ok(pending_pair()));
        assert_eq!(ids(&list), ["2"]);

        // a fetch issued afterwards is authoritative again
        let fresh = list.begin_fetch();
        list.finish_fetch(fresh, Ok(pending_pair()));
        assert_eq!(ids(&list), ["1", "2"]);
    }

    #[test]
    fn fetch_issued_before_status_change_keeps_confirmed_status() {
        let mut list = loaded(pending_pair());
        list.set_tab(StatusTab::All);
        let in_flight_fetch = list.begin_fetch();
        let approve = list
            .begin_action(&id("2"), ModerationAction::Approve)
            .unwrap();
        list.finish_action(approve, Ok(()));
        list.finish_fetch(in_flight_fetch, Ok(pending_pair()));
        assert_eq!(list.items()[1].status, ModerationStatus::Approved);
    }

    #[test]
    fn detach_ignores_everything_outstanding() {
        let mut list = loaded(pending_pair());
        let fetch = list.begin_fetch();
        let action = list
            .begin_action(&id("1"), ModerationAction::Delete)
            .unwrap();
        list.detach();
        assert!(!list.is_loading());
        assert_eq!(
            list.finish_fetch(fetch, Ok(Vec::new())),
            FetchOutcome::Detached
        );
        assert_eq!(list.finish_action(action, Ok(())), ActionOutcome::Detached);
        assert_eq!(ids(&list), ["1", "2"]);
    }

    #[test]
    fn deleting_the_selected_entity_closes_detail() {
        let mut list = loaded(pending_pair());
        assert!(list.select(&id("1")));
        assert_eq!(list.selected().map(|a| a.name.as_str()), Some("A"));
        let ticket = list
            .begin_action(&id("1"), ModerationAction::Delete)
            .unwrap();
        list.finish_action(ticket, Ok(()));
        assert!(list.selected().is_none());
        assert!(!list.select(&id("1")));
    }

    #[test]
    fn confirmation_propagates_to_other_lists() {
        let mut pending = loaded(pending_pair());
        let mut all = loaded(pending_pair());
        all.set_tab(StatusTab::All);

        let ticket = pending

            .begin_action(&id("1"), ModerationAction::Delete)

            .unwrap();
        let ActionOutcome::Confirmed(confirmation) =
            pending.finish_action(ticket, Ok(()))
        else {
            panic!("expected confirmation");
        };
        all.absorb(&confirmation);

        assert_eq!(ids(&pending), ["2"]);
        assert_eq!(ids(&all), ["2"]);
    }

    #[test]
    fn visible_applies_filter_state() {
        let mut list = loaded(pending_pair());
        list.set_query("b@".to_string());
        let visible: Vec<_> =
            list.visible().iter().map(|a| a.id.0.clone()).collect();
        assert_eq!(visible, ["2"]);
        list.clear_filters();
        assert_eq!(list.visible().len(), 2);
    }
}
