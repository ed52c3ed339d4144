use std::rc::Rc;

use tierlist_core::RenderBundle;
use yew::prelude::*;

use crate::components::{TierGroup, VersionNav};

/// Document title for a version's page.
#[must_use]
pub fn page_title(version: &str) -> String {
    format!("Official Smash Ultimate {version} Tier List")
}

/// Keeps `document.title` in step with the version shown after client-side navigation.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_document_title(version: AttrValue) {
    use_effect_with(version, |version| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&page_title(version));
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_document_title(version: AttrValue) {
    let _ = version;
}

#[derive(Properties, PartialEq)]
pub struct TierListPageProps {
    pub bundle: Rc<RenderBundle>,
}

#[function_component(TierListPage)]
pub fn tier_list_page(props: &TierListPageProps) -> Html {
    let bundle = &props.bundle;
    let version = AttrValue::from(bundle.version.clone());

    use_document_title(version.clone());

    html! {
        <div class="min-h-screen bg-gray-800 flex flex-col space-y-5 py-10">
            <VersionNav
                version={version.clone()}
                previous={bundle.previous.clone().map(AttrValue::from)}
                next={bundle.next.clone().map(AttrValue::from)}
            />
            { for bundle.tier_list.iter().map(|tier| html! {
                <TierGroup key={tier.name.clone()} tier={tier.clone()} revision={version.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tierlist_core::{Tier, TierList};
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::prelude::Router;

    #[function_component(Harness)]
    fn harness(props: &TierListPageProps) -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <TierListPage bundle={props.bundle.clone()} />
            </Router>
        }
    }

    #[test]
    fn title_names_the_version() {
        assert_eq!(page_title("13.0.1"), "Official Smash Ultimate 13.0.1 Tier List");
    }

    #[test]
    fn page_renders_on_the_server_without_touching_the_document() {
        let bundle = RenderBundle {
            version: "2.0".into(),
            tier_list: TierList::from_iter([Tier::new("S", ["link"])]),
            previous: None,
            next: None,
        };
        let props = TierListPageProps {
            bundle: Rc::new(bundle),
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("Smash Ultimate Version 2.0 Tier List"));
        assert!(html.contains("S Tier"));
    }
}
