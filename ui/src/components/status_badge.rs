use payloads::ModerationStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: ModerationStatus,
}

#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let colors = match props.status {
        ModerationStatus::Pending => {
            "bg-yellow-100 text-yellow-800 \
             dark:bg-yellow-900 dark:text-yellow-200"
        }
        ModerationStatus::Approved | ModerationStatus::Active => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
        }
        ModerationStatus::Inactive => {
            "bg-neutral-200 text-neutral-700 \
             dark:bg-neutral-700 dark:text-neutral-200"
        }
        ModerationStatus::Rejected => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200"
        }
    };

    html! {
        <span class={classes!(
            "px-2", "py-0.5", "rounded-full", "text-xs", "font-medium", colors
        )}>
            {props.status.label()}
        </span>
    }
}
