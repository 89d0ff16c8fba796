use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::{State, ThemeMode};

const THEME_KEY: &str = "theme";

fn storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_stored_theme() -> ThemeMode {
    storage()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .map(|value| ThemeMode::parse(&value))
        .unwrap_or_default()
}

fn store_theme(mode: ThemeMode) {
    let Some(storage) = storage() else {
        return;
    };
    // system is the default, so it is stored as no preference
    let _ = match mode {
        ThemeMode::System => storage.remove_item(THEME_KEY),
        mode => storage.set_item(THEME_KEY, mode.as_str()),
    };
}

fn apply_theme_to_document(dark: bool) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = html.class_list();
    let _ = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
}

/// Keeps the document class in sync with the effective theme. Mounted once
/// by the app root.
#[hook]
pub fn use_theme_sync() {
    let (state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        let stored = get_stored_theme();
        dispatch.reduce_mut(move |state| state.theme_mode = stored);
    });

    use_effect_with(state.is_dark_mode(), |dark| {
        apply_theme_to_document(*dark);
    });
}

#[function_component]
pub fn ThemeToggle() -> Html {
    let (state, dispatch) = use_store::<State>();
    let mode = state.theme_mode;

    let toggle_theme = dispatch.reduce_mut_callback(|state| {
        state.theme_mode = state.theme_mode.next();
        store_theme(state.theme_mode);
    });

    let (icon, title) = match mode {
        ThemeMode::Light => ("☀️", "Light theme (switch to dark)"),
        ThemeMode::Dark => ("🌙", "Dark theme (switch to system)"),
        ThemeMode::System => ("🖥️", "System theme (switch to light)"),
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700
                   transition-colors"
            onclick={toggle_theme}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}
