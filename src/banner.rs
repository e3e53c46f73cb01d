use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::config::{
    DESKTOP_BANNER, MOBILE_BANNER, MOBILE_MAX_WIDTH, TABLET_BANNER, TABLET_MAX_WIDTH,
};
use crate::dom;

const HERO_BG: &str = ".hero-bg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Viewport::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Viewport::Tablet
        } else {
            Viewport::Desktop
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Viewport::Mobile => MOBILE_BANNER,
            Viewport::Tablet => TABLET_BANNER,
            Viewport::Desktop => DESKTOP_BANNER,
        }
    }
}

pub fn background_image(path: &str) -> String {
    format!("url({})", path)
}

fn apply(window: &Window, hero: &HtmlElement) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let viewport = Viewport::from_width(width);
    dom::set_style(hero, "background-image", &background_image(viewport.banner()))?;
    Ok(viewport)
}

/// Picks the hero banner for the current viewport and re-picks it on every
/// resize.
pub fn setup(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(hero) = dom::query(document, HERO_BG)? else {
        debug!("No hero banner on this page");
        return Ok(());
    };

    let viewport = apply(window, &hero)?;
    info!("Hero banner set for {:?} viewport", viewport);

    let win = window.clone();
    dom::listen(window, "resize", move |_| {
        let _ = apply(&win, &hero);
    })
}
