use moderation::StatusTab;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A facet dropdown with the values present in the fetched collection.
#[derive(Clone, PartialEq)]
pub struct FacetView {
    pub key: &'static str,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: String,
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub query: String,
    pub facets: Vec<FacetView>,
    pub tabs: Vec<StatusTab>,
    pub active_tab: StatusTab,
    pub on_query: Callback<String>,
    pub on_facet: Callback<(&'static str, String)>,
    pub on_tab: Callback<StatusTab>,
    pub on_clear: Callback<()>,
}

const ACTIVE_TAB: &str =
    "border-neutral-900 dark:border-white text-neutral-900 dark:text-white";
const IDLE_TAB: &str = "border-transparent text-neutral-500 \
                        hover:text-neutral-700 dark:hover:text-neutral-300";

#[function_component]
pub fn FilterBar(props: &FilterBarProps) -> Html {
    let on_input = props.on_query.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    let tabs = (props.tabs.len() > 1).then(|| {
        html! {
            <nav class="flex space-x-1 border-b
                        border-neutral-200 dark:border-neutral-700">
                {for props.tabs.iter().map(|tab| {
                    let tab = *tab;
                    let active = tab == props.active_tab;
                    let onclick = props.on_tab.reform(move |_: MouseEvent| tab);
                    html! {
                        <button
                            {onclick}
                            class={classes!(
                                "px-4", "py-2", "text-sm", "font-medium",
                                "-mb-px", "border-b-2",
                                if active { ACTIVE_TAB } else { IDLE_TAB }
                            )}
                        >
                            {tab.label()}
                        </button>
                    }
                })}
            </nav>
        }
    });

    let facets = props.facets.iter().map(|facet| {
        let key = facet.key;
        let onchange = props.on_facet.reform(move |e: Event| {
            (key, e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        html! {
            <select
                {onchange}
                aria-label={facet.label}
                class="px-3 py-2 text-sm rounded-md border
                       border-neutral-300 dark:border-neutral-600
                       bg-white dark:bg-neutral-800"
            >
                <option value="" selected={facet.selected.is_empty()}>
                    {format!("All {}", facet.label.to_lowercase())}
                </option>
                {for facet.options.iter().map(|option| html! {
                    <option
                        value={option.clone()}
                        selected={*option == facet.selected}
                    >
                        {option}
                    </option>
                })}
            </select>
        }
    });

    let on_clear = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <div class="space-y-4">
            {tabs}
            <div class="flex flex-wrap items-center gap-3">
                <input
                    type="search"
                    placeholder="Search…"
                    value={props.query.clone()}
                    oninput={on_input}
                    class="flex-1 min-w-[12rem] px-3 py-2 text-sm
                           rounded-md border border-neutral-300
                           dark:border-neutral-600 bg-white
                           dark:bg-neutral-800"
                />
                {for facets}
                <button
                    onclick={on_clear}
                    class="px-3 py-2 text-sm text-neutral-600
                           dark:text-neutral-300 hover:underline"
                >
                    {"Clear filters"}
                </button>
            </div>
        </div>
    }
}
