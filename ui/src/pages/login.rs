use payloads::{UserType, requests};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::{AuthState, Route, State, auth, state::AuthSnapshot};

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md shadow-sm
    border-neutral-300 dark:border-neutral-600 bg-white dark:bg-neutral-700
    text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2
    focus:ring-neutral-500 focus:border-neutral-500
    dark:focus:ring-neutral-400 dark:focus:border-neutral-400";

const LABEL_CLASS: &str = "block text-sm font-medium mb-2
    text-neutral-700 dark:text-neutral-300";

const SUBMIT_CLASS: &str = "w-full flex justify-center py-2 px-4 border
    border-transparent rounded-md shadow-sm text-sm font-medium text-white
    bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100
    dark:text-neutral-900 dark:hover:bg-neutral-200 focus:outline-none
    focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
    disabled:opacity-50 disabled:cursor-not-allowed
    transition-colors duration-200";

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator();
    let dispatch = use_dispatch::<State>();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    // Already signed in
    let signed_in = auth::current_session()
        .is_some_and(|session| session.user_type == UserType::Admin);
    {
        let navigator = navigator.clone();
        use_effect_with(signed_in, move |signed_in| {
            if let (true, Some(navigator)) = (*signed_in, navigator) {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let email = value(&email_ref).trim().to_string();
            let password = value(&password_ref);

            if let Err(message) = requests::validate_login(&email, &password) {
                error_message.set(Some(message.to_string()));
                return;
            }

            let credentials = requests::LoginCredentials {
                email,
                password,
                user_type: UserType::Admin,
            };
            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error_message.set(None);

                let result = crate::get_api_client().login(&credentials).await;
                match result {
                    Ok(response) if response.user_type != UserType::Admin => {
                        error_message.set(Some(
                            "This account does not have administrator access"
                                .to_string(),
                        ));
                    }
                    Ok(response) => match auth::persist(&response) {
                        Ok(()) => {
                            tracing::info!("admin signed in");
                            let snapshot = AuthSnapshot {
                                user_type: response.user_type,
                                expiry: response.expiry,
                            };
                            dispatch.reduce_mut(|state| {
                                state.auth_state =
                                    AuthState::LoggedIn(snapshot);
                            });
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Dashboard);
                            }
                        }
                        Err(message) => error_message.set(Some(message)),
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "sign in failed");
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedOut;
                        });
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-screen px-4">
            <div class="max-w-md w-full p-8 rounded-lg shadow-md
                        bg-white dark:bg-neutral-800">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold mb-2
                               text-neutral-900 dark:text-neutral-100">
                        {"Alumni Portal Admin"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Sign in with your administrator account"}
                    </p>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    if let Some(error) = &*error_message {
                        <div class="p-4 rounded-md border bg-red-50
                                    dark:bg-red-900/20 border-red-200
                                    dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {error}
                            </p>
                        </div>
                    }

                    <div>
                        <label for="email" class={LABEL_CLASS}>
                            {"Email"}
                        </label>
                        <input
                            ref={email_ref}
                            type="email"
                            id="email"
                            name="email"
                            autocomplete="email"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="admin@example.com"
                        />
                    </div>

                    <div>
                        <label for="password" class={LABEL_CLASS}>
                            {"Password"}
                        </label>
                        <input
                            ref={password_ref}
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="Enter your password"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class={SUBMIT_CLASS}
                    >
                        if *is_loading {
                            {"Signing in..."}
                        } else {
                            {"Sign in"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
