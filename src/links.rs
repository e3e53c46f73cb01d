use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

const CARD: &str = ".card";
const LINKS_WITH_HREF: &str = "a[href]";

pub const CARD_HOVER_TRANSFORM: &str = "scale(1.02) translateY(-4px)";
pub const CARD_REST_TRANSFORM: &str = "scale(1) translateY(0)";

const EXTERNAL_TARGET: &str = "_blank";
const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// In-page anchor, carrying the target id without the `#`.
    Fragment(&'a str),
    External,
    Internal,
}

pub fn classify(href: &str) -> LinkKind<'_> {
    if let Some(id) = href.strip_prefix('#') {
        LinkKind::Fragment(id)
    } else if href.starts_with("http") {
        LinkKind::External
    } else {
        LinkKind::Internal
    }
}

pub fn setup_cards(document: &Document) -> Result<(), JsValue> {
    let cards = dom::query_all(document, CARD)?;
    for card in &cards {
        {
            let el = card.clone();
            dom::listen(card, "mouseenter", move |_| {
                let _ = dom::set_style(&el, "transform", CARD_HOVER_TRANSFORM);
            })?;
        }
        let el = card.clone();
        dom::listen(card, "mouseleave", move |_| {
            let _ = dom::set_style(&el, "transform", CARD_REST_TRANSFORM);
        })?;
    }
    debug!("Hover effects on {} cards", cards.len());
    Ok(())
}

/// Smooth-scrolls in-page anchors to their target. The browser's own jump
/// is always cancelled, even when the target id is missing.
pub fn setup_anchor_links(document: &Document) -> Result<(), JsValue> {
    let mut wired = 0;
    for link in dom::query_all(document, LINKS_WITH_HREF)? {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if !matches!(classify(&href), LinkKind::Fragment(_)) {
            continue;
        }

        let el = link.clone();
        let document = document.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            // href is re-read so markup changes after load are honoured
            let Some(href) = el.get_attribute("href") else {
                return;
            };
            let LinkKind::Fragment(id) = classify(&href) else {
                return;
            };
            match document.get_element_by_id(id) {
                Some(target) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => debug!("No anchor target #{}", id),
            }
        })?;
        wired += 1;
    }
    info!("Smooth scrolling on {} anchor links", wired);
    Ok(())
}

/// Opens off-site links in a new tab without handing it `window.opener`
/// or a referrer.
pub fn harden_external_links(document: &Document) -> Result<(), JsValue> {
    let mut hardened = 0;
    for link in dom::query_all(document, LINKS_WITH_HREF)? {
        let external = link
            .get_attribute("href")
            .is_some_and(|href| classify(&href) == LinkKind::External);
        if external {
            link.set_attribute("target", EXTERNAL_TARGET)?;
            link.set_attribute("rel", EXTERNAL_REL)?;
            hardened += 1;
        }
    }
    info!("Hardened {} external links", hardened);
    Ok(())
}
