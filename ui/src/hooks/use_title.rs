use yew::prelude::*;

const SITE_NAME: &str = "Alumni Portal Admin";

/// Shows `page` in the browser tab. Pages never reset it on unmount; the next
/// page sets its own.
#[hook]
pub fn use_title(page: &str) {
    let title = if page.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{page} · {SITE_NAME}")
    };
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });
}
