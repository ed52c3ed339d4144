use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Shown for any path that is not a known version.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-800 flex flex-col items-center justify-center space-y-5 py-10">
            <h1 class="text-3xl font-semibold text-white">{ NOT_FOUND_TITLE }</h1>
            <p class="text-gray-300">{ "There is no tier list for that version." }</p>
            <Link<Route> to={Route::Latest} classes="text-blue-500">
                { "View the latest tier list" }
            </Link<Route>>
        </div>
    }
}
