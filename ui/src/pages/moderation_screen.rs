use moderation::{
    ActionOutcome, ControllerError, EndpointConfig, ModerationAction,
    Presentable, filter::facet_options,
};
use payloads::{EntityId, EntityKind};
use serde::de::DeserializeOwned;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{
    ConfirmationModal, DetailModal, FacetView, FilterBar, ModerationTable,
    RowView,
};
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::hooks::{FetchReport, ScreenList, spawn_refresh, use_moderation_list};
use crate::{Route, State, auth};

#[derive(Properties, PartialEq)]
pub struct ModerationScreenProps {
    pub config: EndpointConfig,
}

/// What an action needs once it resolves.
struct ActionContext<E> {
    list: ScreenList<E>,
    toast: ToastHandle,
    on_unauthorized: Callback<String>,
}

impl<E> Clone for ActionContext<E> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            toast: self.toast.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

fn capitalized(kind: EntityKind) -> String {
    let kind = kind.to_string();
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => kind,
    }
}

fn run_action<E>(ctx: ActionContext<E>, id: EntityId, action: ModerationAction)
where
    E: Presentable + DeserializeOwned + 'static,
{
    yew::platform::spawn_local(async move {
        match ctx.list.perform(&id, action).await {
            Ok(ActionOutcome::Confirmed(_)) => ctx.toast.success(format!(
                "{} {}",
                capitalized(E::KIND),
                action.past_tense()
            )),
            Ok(ActionOutcome::Failed(ControllerError::Unauthorized(
                message,
            ))) => ctx.on_unauthorized.emit(message),
            Ok(ActionOutcome::Failed(ControllerError::Transient(message))) => {
                let retry = {
                    let ctx = ctx.clone();
                    Callback::from(move |()| {
                        run_action(ctx.clone(), id.clone(), action)
                    })
                };
                ctx.toast.error_with_retry(message, retry);
            }
            // rendered next to the row
            Ok(ActionOutcome::Failed(ControllerError::Rejected(_)))
            | Ok(ActionOutcome::Detached) => {}
            Err(refused) => ctx.toast.info(refused.to_string()),
        }
    });
}

/// A complete admin screen for one entity kind: status tabs, search and
/// facet filters, the table with per-row actions, and the detail modal.
#[function_component]
pub fn ModerationScreen<E>(props: &ModerationScreenProps) -> Html
where
    E: Presentable + DeserializeOwned + 'static,
{
    let toast = use_toast();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<State>();
    let confirm_delete = use_state(|| None::<EntityId>);

    let on_unauthorized = {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |message: String| {
            tracing::info!("session ended, returning to sign in");
            auth::clear();
            dispatch.reduce_mut(|state| state.logout());
            toast.error(message);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let report: FetchReport = {
        let toast = toast.clone();
        let on_unauthorized = on_unauthorized.clone();
        Callback::from(move |(error, retry): (ControllerError, Callback<()>)| {
            match error {
                ControllerError::Unauthorized(message) => {
                    on_unauthorized.emit(message)
                }
                e => toast.error_with_retry(e.to_string(), retry),
            }
        })
    };

    let list = use_moderation_list::<E>(props.config.clone(), report.clone());

    // Keep the sidebar badge in step with the signup queue.
    let fetched_count =
        list.with(|l| l.is_fetched().then(|| l.items().len()));
    {
        let dispatch = dispatch.clone();
        use_effect_with(fetched_count, move |count| {
            if let (EntityKind::Registration, Some(count)) = (E::KIND, *count) {
                dispatch.reduce_mut(|state| {
                    state.pending_registrations = Some(count)
                });
            }
        });
    }

    let ctx = ActionContext {
        list: list.clone(),
        toast,
        on_unauthorized,
    };

    let on_action = {
        let ctx = ctx.clone();
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |(id, action): (EntityId, ModerationAction)| {
            if action.is_destructive() {
                confirm_delete.set(Some(id));
            } else {
                run_action(ctx.clone(), id, action);
            }
        })
    };

    let on_query = {
        let list = list.clone();
        Callback::from(move |query: String| list.update(|l| l.set_query(query)))
    };
    let on_facet = {
        let list = list.clone();
        Callback::from(move |(key, value): (&'static str, String)| {
            list.update(|l| l.set_facet(key, value))
        })
    };
    let on_clear = {
        let list = list.clone();
        Callback::from(move |()| list.update(|l| l.clear_filters()))
    };
    let on_tab = {
        let list = list.clone();
        let report = report.clone();
        Callback::from(move |tab| {
            if list.update(|l| l.set_tab(tab)) {
                spawn_refresh(&list, &report);
            }
        })
    };
    let on_select = {
        let list = list.clone();
        Callback::from(move |id: EntityId| {
            list.update(|l| l.select(&id));
        })
    };
    let on_dismiss_error = {
        let list = list.clone();
        Callback::from(move |id: EntityId| {
            list.update(|l| l.dismiss_row_error(&id))
        })
    };
    let on_close_detail = {
        let list = list.clone();
        Callback::from(move |()| list.update(|l| l.close_detail()))
    };
    let on_retry = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| spawn_refresh(&list, &report))
    };

    let config = &props.config;
    let plural = E::KIND.plural();

    let (filter, facets, rows, total, loading, fetched, error) = list.with(|l| {
        let facets = E::facets()
            .iter()
            .map(|facet| FacetView {
                key: facet.key,
                label: facet.label,
                options: facet_options(l.items(), facet),
                selected: l
                    .filter()
                    .facets
                    .get(facet.key)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();
        let rows = l
            .visible()
            .into_iter()
            .map(|entity| RowView {
                id: entity.id().clone(),
                status: entity.status(),
                cells: entity.row(),
                actions: config.actions_for(entity.status()),
                busy: l.in_flight_action(entity.id()),
                error: l.row_error(entity.id()).map(str::to_string),
            })
            .collect::<Vec<_>>();
        (
            l.filter().clone(),
            facets,
            rows,
            l.items().len(),
            l.is_loading(),
            l.is_fetched(),
            l.error().cloned(),
        )
    });

    let detail = list.with(|l| {
        l.selected().map(|entity| {
            let id = entity.id().clone();
            let on_action = on_action.reform({
                let id = id.clone();
                move |action: ModerationAction| (id.clone(), action)
            });
            html! {
                <DetailModal
                    title={entity.headline()}
                    status={entity.status()}
                    sections={entity.detail()}
                    actions={config.actions_for(entity.status())}
                    busy={l.in_flight_action(&id)}
                    error={l.row_error(&id).map(str::to_string)}
                    {on_action}
                    on_close={on_close_detail.clone()}
                />
            }
        })
    });

    let confirmation = (*confirm_delete).clone().map(|id| {
        let on_confirm = {
            let ctx = ctx.clone();
            let confirm_delete = confirm_delete.clone();
            Callback::from(move |()| {
                run_action(ctx.clone(), id.clone(), ModerationAction::Delete);
                confirm_delete.set(None);
            })
        };
        let on_close = {
            let confirm_delete = confirm_delete.clone();
            Callback::from(move |()| confirm_delete.set(None))
        };
        html! {
            <ConfirmationModal
                title={format!("Delete this {}?", E::KIND)}
                message={"This permanently removes the entry and cannot \
                          be undone."}
                confirm_text="Delete"
                {on_confirm}
                {on_close}
            />
        }
    });

    let body = if !fetched {
        match (loading, error) {
            (_, Some(error)) if !loading => html! {
                <div class="p-6 text-center space-y-3 rounded-lg border
                            border-red-200 dark:border-red-800">
                    <p class="text-red-700 dark:text-red-400">
                        {format!("Could not load {plural}: {error}")}
                    </p>
                    <button
                        onclick={on_retry}
                        class="px-3 py-2 text-sm rounded-md border
                               border-neutral-300 dark:border-neutral-600"
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            _ => html! {
                <p class="p-6 text-center text-neutral-500">
                    {format!("Loading {plural}…")}
                </p>
            },
        }
    } else if rows.is_empty() {
        let message = if filter.is_active() {
            format!("No {plural} match the current filters.")
        } else {
            format!("No {plural} found.")
        };
        html! { <p class="p-6 text-center text-neutral-500">{message}</p> }
    } else {
        html! {
            <ModerationTable
                columns={E::columns()}
                {rows}
                {on_action}
                {on_select}
                {on_dismiss_error}
            />
        }
    };

    let summary = fetched.then(|| {
        let shown = list.with(|l| l.visible().len());
        html! {
            <p class="text-sm text-neutral-500">
                {format!("Showing {shown} of {total} {plural}")}
                if loading { {" · refreshing…"} }
            </p>
        }
    });

    html! {
        <div class="space-y-4">
            <FilterBar
                query={filter.query.clone()}
                {facets}
                tabs={config.tabs.clone()}
                active_tab={filter.tab}
                {on_query}
                {on_facet}
                {on_tab}
                {on_clear}
            />
            {summary}
            {body}
            {detail}
            {confirmation}
        </div>
    }
}
