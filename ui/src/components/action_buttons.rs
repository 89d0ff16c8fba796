use moderation::ModerationAction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub actions: Vec<ModerationAction>,
    /// The action currently in flight for this entity, if any.
    #[prop_or_default]
    pub busy: Option<ModerationAction>,
    pub on_action: Callback<ModerationAction>,
}

fn button_class(action: &ModerationAction) -> &'static str {
    match action {
        ModerationAction::Approve => {
            "bg-green-600 hover:bg-green-700 text-white"
        }
        ModerationAction::Reject => {
            "bg-amber-600 hover:bg-amber-700 text-white"
        }
        ModerationAction::Delete => "bg-red-600 hover:bg-red-700 text-white",
        ModerationAction::SetStatus(_) => {
            "bg-neutral-200 hover:bg-neutral-300 text-neutral-900 \
             dark:bg-neutral-700 dark:hover:bg-neutral-600 \
             dark:text-neutral-100"
        }
    }
}

/// One button per available action. All of them are disabled while any
/// action on the entity is in flight.
#[function_component]
pub fn ActionButtons(props: &ActionButtonsProps) -> Html {
    let disabled = props.busy.is_some();

    html! {
        <div class="flex flex-wrap gap-2">
            {for props.actions.iter().map(|action| {
                let action = *action;
                let onclick = props.on_action.reform(move |e: MouseEvent| {
                    // keep the row click from opening the detail view
                    e.stop_propagation();
                    action
                });
                let label = if props.busy == Some(action) {
                    format!("{}…", action.label())
                } else {
                    action.label()
                };
                html! {
                    <button
                        {onclick}
                        {disabled}
                        class={classes!(
                            "px-3", "py-1", "text-xs", "font-medium",
                            "rounded-md", "disabled:opacity-50",
                            "disabled:cursor-not-allowed",
                            button_class(&action)
                        )}
                    >
                        {label}
                    </button>
                }
            })}
        </div>
    }
}
