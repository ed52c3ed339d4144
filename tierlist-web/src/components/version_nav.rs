use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

pub const PREVIOUS_LABEL: &str = "« Previous";
pub const NEXT_LABEL: &str = "Next »";

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct VersionNavProps {
    pub version: AttrValue,
    #[prop_or_default]
    pub previous: Option<AttrValue>,
    #[prop_or_default]
    pub next: Option<AttrValue>,
}

/// Previous/next version links around the page heading.
///
/// A missing neighbour leaves an invisible placeholder so the heading stays centred.
#[function_component(VersionNav)]
pub fn version_nav(props: &VersionNavProps) -> Html {
    html! {
        <div class="flex justify-between items-center px-5">
            { nav_control(props.previous.as_ref(), PREVIOUS_LABEL) }
            <h1 class="text-3xl px-3 font-semibold text-center text-white">
                { format!("Smash Ultimate Version {} Tier List", props.version) }
            </h1>
            { nav_control(props.next.as_ref(), NEXT_LABEL) }
        </div>
    }
}

fn nav_control(target: Option<&AttrValue>, label: &'static str) -> Html {
    match target {
        Some(version) => html! {
            <Link<Route>
                to={Route::Version { version: version.to_string() }}
                classes="min-w-max text-blue-500"
            >
                { label }
            </Link<Route>>
        },
        None => html! {
            <div class="invisible" aria-hidden="true">{ label }</div>
        },
    }
}
