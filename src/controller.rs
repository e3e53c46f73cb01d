use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::{animation, banner, contact, links, nav, scroll};

/// Wires every page behavior to the current document.
pub struct PageController {
    window: Window,
    document: Document,
}

impl PageController {
    pub fn new(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self { window, document })
    }

    /// Runs each setup step once. A failing step is logged and skipped so
    /// the rest of the page still gets its behavior.
    pub fn init(&self) {
        let (window, document) = (&self.window, &self.document);

        self.step("mobile menu", nav::setup_mobile_menu(document));
        self.step("header", scroll::setup_header(window, document));
        self.step("active links", nav::highlight_active_links(window, document));
        self.step("anchor links", links::setup_anchor_links(document));
        self.step("reveal animations", animation::setup_reveal(document));
        self.step("contact form", contact::setup(window, document));
        self.step("hero banner", banner::setup(window, document));
        self.step("cards", links::setup_cards(document));
        self.step("parallax", scroll::setup_parallax(window, document));
        self.step("stagger delays", animation::setup_stagger(document));
        self.step("external links", links::harden_external_links(document));
        self.step("scroll to top", scroll::setup_scroll_to_top(window, document));

        info!("Page behaviors initialized");
    }

    fn step(&self, name: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            warn!("Setting up {} failed: {:?}", name, err);
        }
    }
}
