use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

const LINKS: [(Route, &str); 8] = [
    (Route::Dashboard, "Dashboard"),
    (Route::PendingRequests, "Pending requests"),
    (Route::Alumni, "Alumni"),
    (Route::Students, "Students"),
    (Route::Jobs, "Jobs"),
    (Route::Events, "Events"),
    (Route::Blogs, "Blogs"),
    (Route::Mentorship, "Mentorship"),
];

const ACTIVE_LINK: &str = "bg-neutral-200 dark:bg-neutral-800 font-medium";
const IDLE_LINK: &str = "hover:bg-neutral-100 dark:hover:bg-neutral-800";

#[function_component]
pub fn Sidebar() -> Html {
    let current = use_route::<Route>();
    let (state, _) = use_store::<State>();

    html! {
        <aside class="w-60 flex-shrink-0 border-r
                      border-neutral-200 dark:border-neutral-700
                      bg-neutral-50 dark:bg-neutral-900">
            <div class="h-16 px-6 flex items-center font-semibold
                        text-neutral-900 dark:text-white">
                {"Alumni Portal"}
            </div>
            <nav class="px-3 space-y-1">
                {for LINKS.iter().map(|(route, label)| {
                    let active = current.as_ref() == Some(route);
                    let badge = match route {
                        Route::PendingRequests => {
                            pending_badge(state.pending_registrations)
                        }
                        _ => html! {},
                    };
                    html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!(
                                "flex", "items-center", "px-3", "py-2",
                                "rounded-md", "text-sm",
                                if active { ACTIVE_LINK } else { IDLE_LINK }
                            )}
                        >
                            {*label}
                            {badge}
                        </Link<Route>>
                    }
                })}
            </nav>
        </aside>
    }
}

fn pending_badge(count: Option<usize>) -> Html {
    match count {
        Some(count) if count > 0 => html! {
            <span class="ml-auto px-2 rounded-full text-xs
                         bg-yellow-200 text-yellow-900">
                {count}
            </span>
        },
        _ => html! {},
    }
}
