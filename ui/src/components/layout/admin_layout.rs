use yew::prelude::*;

use crate::components::layout::Sidebar;
use crate::hooks::{use_logout, use_title};
use crate::theme::ThemeToggle;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub title: AttrValue,
    pub children: Children,
}

/// Dashboard shell: sidebar navigation, a header with the page title, and
/// the page content.
#[function_component]
pub fn AdminLayout(props: &AdminLayoutProps) -> Html {
    use_title(&props.title);
    let logout = use_logout();

    html! {
        <div class="min-h-screen flex">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 px-6 flex items-center justify-between
                               border-b border-neutral-200
                               dark:border-neutral-700
                               bg-white dark:bg-neutral-900">
                    <h1 class="text-xl font-semibold text-neutral-900
                               dark:text-white">
                        {&props.title}
                    </h1>
                    <div class="flex items-center space-x-3">
                        <ThemeToggle />
                        <button
                            onclick={logout}
                            class="px-3 py-2 text-sm rounded-md border
                                   border-neutral-300 dark:border-neutral-600
                                   hover:bg-neutral-100
                                   dark:hover:bg-neutral-800"
                        >
                            {"Sign out"}
                        </button>
                    </div>
                </header>
                <main class="flex-1 p-6 overflow-y-auto">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
