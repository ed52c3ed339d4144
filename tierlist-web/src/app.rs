use std::rc::Rc;

use tierlist_core::{RenderBundle, TierListData, resolve_page};
use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::pages::{NotFound, TierListPage};
use crate::paths;
use crate::router::Route;

#[derive(Properties, PartialEq, Eq, Debug, Default)]
pub struct AppProps {
    /// Location to render at. `None` follows the browser location; the static
    /// builder passes the URL of the page being generated.
    #[prop_or_default]
    pub url: Option<AttrValue>,
    /// Dataset to render from. `None` uses the dataset compiled into the crate.
    #[prop_or_default]
    pub data: Option<Rc<TierListData>>,
}

/// Dataset shared with every routed view; `None` when it failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetContext(pub Option<Rc<TierListData>>);

/// Root component shared by server rendering and client hydration.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let history = use_memo(props.url.clone(), |url| app_history(url.as_deref()));
    let dataset = use_memo(props.data.clone(), |data| {
        DatasetContext(data.clone().or_else(bundled_dataset))
    });
    let router_base = paths::router_base().map(AttrValue::from);
    html! {
        <Router history={(*history).clone()} basename={router_base}>
            <ContextProvider<DatasetContext> context={(*dataset).clone()}>
                <Switch<Route> render={switch} />
            </ContextProvider<DatasetContext>>
        </Router>
    }
}

fn app_history(url: Option<&str>) -> AnyHistory {
    match url {
        Some(url) => {
            let history = AnyHistory::from(MemoryHistory::new());
            history.push(url);
            history
        }
        None => AnyHistory::from(BrowserHistory::new()),
    }
}

thread_local! {
    static BUNDLED: Option<Rc<TierListData>> = match TierListData::bundled() {
        Ok(data) => Some(Rc::new(data.clone())),
        Err(err) => {
            log::error!("Failed to load tier list data: {err}");
            None
        }
    };
}

/// The compiled-in dataset, copied into an `Rc` once per thread.
fn bundled_dataset() -> Option<Rc<TierListData>> {
    BUNDLED.with(Clone::clone)
}

/// Resolve the render bundle a route shows, logging why when there is none.
#[must_use]
pub fn resolve_for_route(data: &TierListData, route: &Route) -> Option<RenderBundle> {
    let segments = route.segments()?;
    match resolve_page(data, &segments) {
        Ok(bundle) => Some(bundle),
        Err(err) => {
            log::warn!("Route {route:?} did not resolve: {err}");
            None
        }
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}

#[derive(Properties, PartialEq, Eq)]
struct RouteViewProps {
    route: Route,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let dataset = use_context::<DatasetContext>().and_then(|ctx| ctx.0);
    let bundle = dataset
        .as_deref()
        .and_then(|data| resolve_for_route(data, &props.route));
    match bundle {
        Some(bundle) => html! { <TierListPage bundle={Rc::new(bundle)} /> },
        None => html! { <NotFound /> },
    }
}
