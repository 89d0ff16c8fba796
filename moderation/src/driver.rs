//! The async half of the controller: fetching collections and dispatching
//! actions against the backend, then folding the results into a
//! [`ListController`].
//!
//! Everything runs on one thread. The controller sits in a `RefCell` and is
//! only borrowed between awaits, never across one.

use jiff::Timestamp;
use payloads::{APIClient, EntityId};
use serde::de::DeserializeOwned;
use std::{cell::RefCell, rc::Rc};

use crate::{
    auth::{AuthAccessor, SessionReader},
    controller::{ActionOutcome, ActionRefused, FetchOutcome, ListController},
    endpoint::{EndpointConfig, ModerationAction},
    entity::Moderated,
    error::ControllerError,
    filter::StatusTab,
};

/// Read one tab of a collection. Fails without a request when there is no
/// usable session.
pub async fn fetch_collection<E, S>(
    client: &APIClient,
    config: &EndpointConfig,
    tab: StatusTab,
    auth: &AuthAccessor<S>,
    now: Timestamp,
) -> Result<Vec<E>, ControllerError>
where
    E: DeserializeOwned,
    S: SessionReader,
{
    let token = auth.bearer(now)?;
    let items = client
        .list(config.collection, config.list_field, tab.query_status(), &token)
        .await?;
    Ok(items)
}

/// Send one mutation. Fails without a request when there is no usable
/// session or the endpoint has no route for the action.
pub async fn send_action<S: SessionReader>(
    client: &APIClient,
    config: &EndpointConfig,
    auth: &AuthAccessor<S>,
    now: Timestamp,
    id: &EntityId,
    action: ModerationAction,
) -> Result<(), ControllerError> {
    if !config.supports(&action) {
        return Err(ControllerError::Rejected(
            ActionRefused::Unsupported.to_string(),
        ));
    }
    let token = auth.bearer(now)?;
    if action.is_destructive() {
        client.delete(config.collection, id, &token).await?;
        return Ok(());
    }
    let (route, body) = config.mutation(&action).ok_or_else(|| {
        ControllerError::Rejected(ActionRefused::Unsupported.to_string())
    })?;
    client
        .moderate(
            route.method.clone(),
            config.collection,
            id,
            route.path,
            &body,
            &token,
        )
        .await?;
    Ok(())
}

struct Inner<E, S> {
    list: RefCell<ListController<E>>,
    client: APIClient,
    auth: AuthAccessor<S>,
    clock: fn() -> Timestamp,
    on_change: Option<Box<dyn Fn()>>,
}

/// Cloneable handle tying a list controller to a backend client and the
/// auth session. Clones share the same list.
pub struct ModerationList<E, S> {
    inner: Rc<Inner<E, S>>,
}

impl<E, S> Clone for ModerationList<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E, S> ModerationList<E, S>
where
    E: Moderated + DeserializeOwned,
    S: SessionReader,
{
    pub fn new(
        config: EndpointConfig,
        client: APIClient,
        auth: AuthAccessor<S>,
    ) -> Self {
        Self::build(config, client, auth, Timestamp::now, None)
    }

    /// `on_change` runs after every state transition so a view can
    /// re-render; `clock` supplies the time used for session expiry.
    pub fn build(
        config: EndpointConfig,
        client: APIClient,
        auth: AuthAccessor<S>,
        clock: fn() -> Timestamp,
        on_change: Option<Box<dyn Fn()>>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                list: RefCell::new(ListController::new(config)),
                client,
                auth,
                clock,
                on_change,
            }),
        }
    }

    /// Read access to the controller state.
    pub fn with<R>(&self, f: impl FnOnce(&ListController<E>) -> R) -> R {
        f(&self.inner.list.borrow())
    }

    /// Synchronous state changes (filters, selection, tab).
    pub fn update<R>(&self, f: impl FnOnce(&mut ListController<E>) -> R) -> R {
        let result = f(&mut self.inner.list.borrow_mut());
        self.changed();
        result
    }

    fn changed(&self) {
        if let Some(on_change) = &self.inner.on_change {
            on_change();
        }
    }

    /// Fetch the active tab and fold the result in.
    pub async fn refresh(&self) -> FetchOutcome {
        let (ticket, config) = {
            let mut list = self.inner.list.borrow_mut();
            (list.begin_fetch(), list.config().clone())
        };
        self.changed();

        let result = fetch_collection(
            &self.inner.client,
            &config,
            ticket.tab(),
            &self.inner.auth,
            (self.inner.clock)(),
        )
        .await;

        let outcome = self.inner.list.borrow_mut().finish_fetch(ticket, result);
        self.changed();
        outcome
    }

    /// Switch tabs, refetching when the tab actually changed.
    pub async fn show_tab(&self, tab: StatusTab) -> Option<FetchOutcome> {
        if !self.update(|list| list.set_tab(tab)) {
            return None;
        }
        Some(self.refresh().await)
    }

    /// Dispatch one action and reconcile on completion.
    pub async fn perform(
        &self,
        id: &EntityId,
        action: ModerationAction,
    ) -> Result<ActionOutcome, ActionRefused> {
        let (ticket, config) = {
            let mut list = self.inner.list.borrow_mut();
            (list.begin_action(id, action)?, list.config().clone())
        };
        self.changed();

        let result = send_action(
            &self.inner.client,
            &config,
            &self.inner.auth,
            (self.inner.clock)(),
            id,
            action,
        )
        .await;

        let outcome =
            self.inner.list.borrow_mut().finish_action(ticket, result);
        if let ActionOutcome::Confirmed(confirmation) = &outcome {
            tracing::info!(
                kind = %config.kind,
                id = %confirmation.id,
                "{} {}",
                config.kind,
                action.past_tense()
            );
        }
        self.changed();
        Ok(outcome)
    }

    /// Stop accepting results; in-flight requests resolve into nothing.
    pub fn detach(&self) {
        self.inner.list.borrow_mut().detach();
    }
}
