use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh]
                    space-y-4 text-center">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">
                {"404"}
            </h1>
            <p class="text-neutral-600 dark:text-neutral-300">
                {"Page not found"}
            </p>
            <Link<Route> to={Route::Dashboard} classes="underline text-sm">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
