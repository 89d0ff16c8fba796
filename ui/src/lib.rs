use moderation::EndpointConfig;
use payloads::{
    APIClient,
    responses::{
        Alumni, Blog, Event, Job, MentorshipRequest, RegistrationRequest,
        Student,
    },
};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod auth;
pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod theme;

pub use state::{AuthState, State};

use components::{RequireAuth, ToastContainer, layout::AdminLayout};
use contexts::toast::ToastProvider;
use pages::{DashboardPage, LoginPage, ModerationScreen, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient::new(address)
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    hooks::use_system_theme();
    theme::use_theme_sync();

    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-neutral-900
                            text-neutral-900 dark:text-neutral-100
                            transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/alumni")]
    Alumni,
    #[at("/students")]
    Students,
    #[at("/jobs")]
    Jobs,
    #[at("/events")]
    Events,
    #[at("/blogs")]
    Blogs,
    #[at("/mentorship")]
    Mentorship,
    #[at("/pending-requests")]
    PendingRequests,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// One moderation screen behind the auth guard and the dashboard shell.
fn admin_screen<E>(title: &'static str, config: EndpointConfig) -> Html
where
    E: moderation::Presentable + serde::de::DeserializeOwned + 'static,
{
    html! {
        <RequireAuth>
            <AdminLayout {title}>
                <ModerationScreen<E> {config} />
            </AdminLayout>
        </RequireAuth>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <AdminLayout title="Dashboard">
                    <DashboardPage />
                </AdminLayout>
            </RequireAuth>
        },
        Route::Alumni => {
            admin_screen::<Alumni>("Alumni", EndpointConfig::alumni())
        }
        Route::Students => {
            admin_screen::<Student>("Students", EndpointConfig::students())
        }
        Route::Jobs => admin_screen::<Job>("Jobs", EndpointConfig::jobs()),
        Route::Events => {
            admin_screen::<Event>("Events", EndpointConfig::events())
        }
        Route::Blogs => admin_screen::<Blog>("Blogs", EndpointConfig::blogs()),
        Route::Mentorship => admin_screen::<MentorshipRequest>(
            "Mentorship",
            EndpointConfig::mentorship(),
        ),
        Route::PendingRequests => admin_screen::<RegistrationRequest>(
            "Pending requests",
            EndpointConfig::registrations(),
        ),
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
