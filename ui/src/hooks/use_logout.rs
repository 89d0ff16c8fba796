use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State, auth};

/// Forget the stored session and go to the login page. Sessions are bearer
/// tokens, so there is nothing to tell the backend.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let dispatch = use_dispatch::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        auth::clear();
        dispatch.reduce_mut(|state| state.logout());
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
