use moderation::ModerationAction;
use payloads::{EntityId, ModerationStatus};
use yew::prelude::*;

use crate::components::{ActionButtons, StatusBadge};

/// Everything one table row renders, computed from the controller.
#[derive(Clone, PartialEq)]
pub struct RowView {
    pub id: EntityId,
    pub status: ModerationStatus,
    pub cells: Vec<String>,
    pub actions: Vec<ModerationAction>,
    pub busy: Option<ModerationAction>,
    /// Server message of the last refused action on this row.
    pub error: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct ModerationTableProps {
    pub columns: &'static [&'static str],
    pub rows: Vec<RowView>,
    pub on_action: Callback<(EntityId, ModerationAction)>,
    pub on_select: Callback<EntityId>,
    pub on_dismiss_error: Callback<EntityId>,
}

static TRAILING_COLUMNS: [&str; 2] = ["Status", "Actions"];

#[function_component]
pub fn ModerationTable(props: &ModerationTableProps) -> Html {
    let header = props
        .columns
        .iter()
        .chain(TRAILING_COLUMNS.iter())
        .map(|column| {
            html! {
                <th class="px-4 py-3 text-left text-xs font-semibold
                           uppercase tracking-wider">
                    {*column}
                </th>
            }
        });

    html! {
        <div class="overflow-x-auto rounded-lg border
                    border-neutral-200 dark:border-neutral-700">
            <table class="min-w-full divide-y
                          divide-neutral-200 dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800
                              text-neutral-600 dark:text-neutral-300">
                    <tr>
                        {for header}
                    </tr>
                </thead>
                <tbody class="divide-y
                              divide-neutral-200 dark:divide-neutral-700">
                    {for props.rows.iter().map(|row| row_html(row, props))}
                </tbody>
            </table>
        </div>
    }
}

fn row_html(row: &RowView, props: &ModerationTableProps) -> Html {
    let onclick = {
        let id = row.id.clone();
        props.on_select.reform(move |_: MouseEvent| id.clone())
    };
    let on_action = {
        let id = row.id.clone();
        props
            .on_action
            .reform(move |action: ModerationAction| (id.clone(), action))
    };
    let error = row.error.as_ref().map(|message| {
        let id = row.id.clone();
        let dismiss = props.on_dismiss_error.reform(move |e: MouseEvent| {
            e.stop_propagation();
            id.clone()
        });
        html! {
            <p class="mt-1 text-xs text-red-600 dark:text-red-400">
                {message}
                {" "}
                <button onclick={dismiss} class="underline" title="Dismiss">
                    {"×"}
                </button>
            </p>
        }
    });

    html! {
        <tr
            key={row.id.to_string()}
            {onclick}
            class="cursor-pointer hover:bg-neutral-50 dark:hover:bg-neutral-800"
        >
            {for row.cells.iter().map(|cell| html! {
                <td class="px-4 py-3 text-sm">{cell}</td>
            })}
            <td class="px-4 py-3"><StatusBadge status={row.status} /></td>
            <td class="px-4 py-3">
                <ActionButtons
                    actions={row.actions.clone()}
                    busy={row.busy}
                    {on_action}
                />
                {error}
            </td>
        </tr>
    }
}
