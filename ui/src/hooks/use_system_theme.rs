use wasm_bindgen::prelude::*;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Hook to automatically track and update system theme preference
#[hook]
pub fn use_system_theme() {
    let dispatch = use_dispatch::<State>();

    use_effect_with((), move |_| {
        let media_query = web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok())
            .flatten();

        let prefers_dark =
            media_query.as_ref().is_some_and(|mql| mql.matches());
        dispatch.reduce_mut(move |state| {
            state.system_prefers_dark = prefers_dark;
        });

        let listener = media_query.map(|media_query| {
            let closure =
                Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    let prefers_dark = event.matches();
                    dispatch.reduce_mut(move |state| {
                        state.system_prefers_dark = prefers_dark;
                    });
                })
                    as Box<dyn FnMut(MediaQueryListEvent)>);
            let _ = media_query.add_event_listener_with_callback(
                "change",
                closure.as_ref().unchecked_ref(),
            );
            (media_query, closure)
        });

        // Rust owns the closure; JS only holds a pointer until removal
        move || {
            if let Some((media_query, closure)) = listener {
                let _ = media_query.remove_event_listener_with_callback(
                    "change",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    });
}
