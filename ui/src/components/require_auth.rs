use payloads::UserType;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, Route, State, auth};

/// Renders its children only for a signed-in administrator with a session
/// that has not expired; otherwise sends the user to the login page.
///
/// The stored session is re-read on every render, so a session that
/// expires while a page is open is caught on the next interaction.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let dispatch = use_dispatch::<State>();
    let session = auth::current_session();
    let snapshot = session.as_ref().map(auth::snapshot);

    use_effect_with(snapshot.clone(), move |snapshot| {
        let auth_state = match snapshot {
            Some(snapshot) => AuthState::LoggedIn(snapshot.clone()),
            None => AuthState::LoggedOut,
        };
        dispatch.reduce_mut(move |state| state.auth_state = auth_state);
    });

    match snapshot {
        None => html! { <Redirect<Route> to={Route::Login} /> },
        Some(snapshot) if snapshot.user_type != UserType::Admin => html! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <p class="text-neutral-600 dark:text-neutral-300">
                    {"This area is only available to administrators."}
                </p>
            </div>
        },
        Some(_) => html! { <>{for props.children.iter()}</> },
    }
}
