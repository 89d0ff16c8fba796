use moderation::{DetailField, DetailSection, ModerationAction};
use payloads::ModerationStatus;
use yew::prelude::*;

use crate::components::{ActionButtons, Modal, StatusBadge};

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub title: String,
    pub status: ModerationStatus,
    pub sections: Vec<DetailSection>,
    pub actions: Vec<ModerationAction>,
    #[prop_or_default]
    pub busy: Option<ModerationAction>,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_action: Callback<ModerationAction>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn DetailModal(props: &DetailModalProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal on_close={props.on_close.clone()} max_width="max-w-2xl">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <h3 class="text-xl font-semibold text-neutral-900
                               dark:text-white">
                        {&props.title}
                    </h3>
                    <StatusBadge status={props.status} />
                </div>
                <button
                    onclick={close}
                    class="text-2xl leading-none text-neutral-400
                           hover:text-neutral-600 dark:hover:text-neutral-200"
                    title="Close"
                >
                    {"×"}
                </button>
            </div>

            <div class="mt-6 space-y-6">
                {for props.sections.iter().map(section_html)}
            </div>

            <div class="mt-6 pt-4 space-y-2 border-t
                        border-neutral-200 dark:border-neutral-700">
                <ActionButtons
                    actions={props.actions.clone()}
                    busy={props.busy}
                    on_action={props.on_action.clone()}
                />
                if let Some(error) = &props.error {
                    <p class="text-sm text-red-600 dark:text-red-400">
                        {error}
                    </p>
                }
            </div>
        </Modal>
    }
}

fn section_html(section: &DetailSection) -> Html {
    html! {
        <section>
            <h4 class="text-sm font-semibold uppercase tracking-wider
                       text-neutral-500 dark:text-neutral-400">
                {&section.title}
            </h4>
            <dl class="mt-2 grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-2">
                {for section.fields.iter().map(field_html)}
            </dl>
        </section>
    }
}

fn field_html(field: &DetailField) -> Html {
    html! {
        <div>
            <dt class="text-xs text-neutral-500 dark:text-neutral-400">
                {field.label}
            </dt>
            <dd class="text-sm text-neutral-900 dark:text-neutral-100
                       break-words">
                if field.href {
                    <a
                        href={field.value.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="underline"
                    >
                        {&field.value}
                    </a>
                } else {
                    {&field.value}
                }
            </dd>
        </div>
    }
}
