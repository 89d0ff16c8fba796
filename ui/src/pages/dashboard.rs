use jiff::Timestamp;
use moderation::{EndpointConfig, fetch_collection};
use payloads::responses::RegistrationRequest;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State, auth};

const CARDS: [(Route, &str, &str); 7] = [
    (
        Route::PendingRequests,
        "Pending requests",
        "Review new alumni and student signups",
    ),
    (Route::Alumni, "Alumni", "Verify alumni profiles"),
    (Route::Students, "Students", "Activate or deactivate student accounts"),
    (Route::Jobs, "Jobs", "Approve job postings and manage listings"),
    (Route::Events, "Events", "Approve submitted events"),
    (Route::Blogs, "Blogs", "Approve blog posts before publication"),
    (Route::Mentorship, "Mentorship", "Review mentorship requests"),
];

#[function_component]
pub fn DashboardPage() -> Html {
    let (state, dispatch) = use_store::<State>();

    // The sidebar badge needs the size of the signup queue.
    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            let config = EndpointConfig::registrations();
            let result = fetch_collection::<RegistrationRequest, _>(
                &crate::get_api_client(),
                &config,
                config.default_tab(),
                &auth::accessor(),
                Timestamp::now(),
            )
            .await;
            match result {
                Ok(pending) => dispatch.reduce_mut(|state| {
                    state.pending_registrations = Some(pending.len());
                }),
                Err(e) => tracing::warn!(
                    error = %e,
                    "could not count pending requests"
                ),
            }
        });
    });

    html! {
        <div class="space-y-6">
            <p class="text-neutral-600 dark:text-neutral-400">
                {match state.pending_registrations {
                    Some(0) => "No signups are waiting for review.".to_string(),
                    Some(1) => "1 signup is waiting for review.".to_string(),
                    Some(count) => {
                        format!("{count} signups are waiting for review.")
                    }
                    None => "Choose a section to moderate.".to_string(),
                }}
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                {for CARDS.iter().map(|(route, title, description)| html! {
                    <Link<Route>
                        to={route.clone()}
                        classes="block p-5 rounded-lg border
                                 border-neutral-200 dark:border-neutral-700
                                 bg-white dark:bg-neutral-800
                                 hover:shadow-md transition-shadow"
                    >
                        <h2 class="text-lg font-semibold text-neutral-900
                                   dark:text-white">
                            {*title}
                        </h2>
                        <p class="mt-1 text-sm text-neutral-600
                                  dark:text-neutral-400">
                            {*description}
                        </p>
                    </Link<Route>>
                })}
            </div>
        </div>
    }
}
