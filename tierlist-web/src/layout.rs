//! Client-side layout animation for character icons.
//!
//! Icons carry `data-layout-id`. After a tier group renders, each icon's page
//! position is compared with the last position recorded for the same id (in
//! any group), and icons that moved are played back from their old spot with a
//! transform transition. Positions are shared across groups so a character
//! moving between tiers glides instead of reappearing.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub const LAYOUT_ID_ATTR: &str = "data-layout-id";
pub const TRANSITION_MS: u32 = 300;

/// Moves smaller than this many pixels are not animated.
const MIN_DELTA_PX: f64 = 0.5;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static LAST_POSITIONS: RefCell<HashMap<String, (f64, f64)>> = RefCell::new(HashMap::new());
}

/// Offset to apply so an icon at `current` appears at `previous`, if it moved.
#[must_use]
pub fn layout_delta(previous: (f64, f64), current: (f64, f64)) -> Option<(f64, f64)> {
    let dx = previous.0 - current.0;
    let dy = previous.1 - current.1;
    (dx.abs() >= MIN_DELTA_PX || dy.abs() >= MIN_DELTA_PX).then_some((dx, dy))
}

#[must_use]
pub fn transition_style() -> String {
    format!("transform {TRANSITION_MS}ms ease-in-out")
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_layout_animation(group: NodeRef) {
    use_effect(move || animate_group(&group));
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_layout_animation(group: NodeRef) {
    let _ = group;
}

#[cfg(target_arch = "wasm32")]
fn animate_group(group: &NodeRef) {
    let Some(container) = group.cast::<web_sys::Element>() else {
        return;
    };
    let Ok(icons) = container.query_selector_all(&format!("[{LAYOUT_ID_ATTR}]")) else {
        return;
    };
    let (scroll_x, scroll_y) = web_sys::window()
        .and_then(|w| Some((w.scroll_x().ok()?, w.scroll_y().ok()?)))
        .unwrap_or((0.0, 0.0));

    for index in 0..icons.length() {
        let Some(icon) = icons
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let Some(id) = icon.get_attribute(LAYOUT_ID_ATTR) else {
            continue;
        };
        let rect = icon.get_bounding_client_rect();
        let current = (rect.left() + scroll_x, rect.top() + scroll_y);
        let previous = LAST_POSITIONS.with(|positions| positions.borrow_mut().insert(id, current));
        if let Some((dx, dy)) = previous.and_then(|prev| layout_delta(prev, current)) {
            play_from_offset(&icon, dx, dy);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn play_from_offset(icon: &web_sys::HtmlElement, dx: f64, dy: f64) {
    let style = icon.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("transform", &format!("translate({dx}px, {dy}px)"));
    // Reading layout flushes the inverted transform before the transition starts.
    let _ = icon.offset_width();
    let _ = style.set_property("transition", &transition_style());
    let _ = style.set_property("transform", "");
}
