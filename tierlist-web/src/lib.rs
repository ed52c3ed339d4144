#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod paths;
pub mod router;
pub mod shell;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Pages are pre-rendered; attach to the existing markup when it is there.
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(shell::APP_ROOT_ID));
    match root {
        Some(root) => {
            yew::Renderer::<app::App>::with_root(root).hydrate();
        }
        None => {
            log::warn!("#{} not found; rendering without hydration", shell::APP_ROOT_ID);
            yew::Renderer::<app::App>::new().render();
        }
    }
}
