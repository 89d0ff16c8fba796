use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A modal overlay that closes on backdrop clicks.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    /// Called when user clicks backdrop or closes the modal
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }
            // clicks inside the dialog bubble up here too
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-40 flex
                   items-center justify-center p-4"
        >
            <div
                role="dialog"
                aria-modal="true"
                class={classes!(
                    "bg-white", "dark:bg-neutral-800",
                    "rounded-lg", "shadow-xl",
                    "w-full", "max-h-[90vh]", "overflow-y-auto", "p-6",
                    props.max_width.to_string()
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_text: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Asks before a destructive action.
#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal on_close={props.on_close.clone()}>
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-white">
                {&props.title}
            </h3>
            <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-300">
                {&props.message}
            </p>
            <div class="mt-6 flex justify-end space-x-3">
                <button
                    onclick={on_cancel}
                    class="px-4 py-2 text-sm rounded-md border
                           border-neutral-300 dark:border-neutral-600
                           hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm}
                    class="px-4 py-2 text-sm rounded-md bg-red-600
                           text-white hover:bg-red-700"
                >
                    {&props.confirm_text}
                </button>
            </div>
        </Modal>
    }
}
