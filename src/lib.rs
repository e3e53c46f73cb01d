//! Browser-side behavior for the static marketing site: navigation, scroll
//! effects, reveal animations, the contact form and link handling.

use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::Window;

pub mod animation;
pub mod banner;
mod config;
pub mod contact;
pub mod controller;
mod dom;
pub mod links;
pub mod nav;
pub mod scroll;

use controller::PageController;

fn init_page(window: Window) {
    match PageController::new(window) {
        Ok(controller) => controller.init(),
        Err(err) => error!("Page behaviors not initialized: {:?}", err),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The module can finish loading after the document was parsed, in which
    // case DOMContentLoaded has already fired.
    let ready_state = Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if ready_state.as_string().as_deref() == Some("loading") {
        info!("Waiting for DOMContentLoaded");
        let mut pending = Some(window);
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(window) = pending.take() {
                init_page(window);
            }
        })
    } else {
        init_page(window);
        Ok(())
    }
}
