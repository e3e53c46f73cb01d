use log::{debug, info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::dom;

const MENU_BUTTON: &str = ".mobile-menu-btn";
const MOBILE_NAV: &str = ".mobile-nav";
const MOBILE_NAV_LINK: &str = ".mobile-nav-link";
const HIGHLIGHTED_LINKS: &str = ".nav-link, .mobile-nav-link";

const OPEN_CLASS: &str = "open";
const ACTIVE_CLASS: &str = "active";

/// Whether the mobile navigation panel is showing. Mirrors the `open`
/// class on `.mobile-nav`; the class stays the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Open,
    Closed,
}

impl NavState {
    pub fn from_open(open: bool) -> Self {
        if open {
            NavState::Open
        } else {
            NavState::Closed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }

    /// State after a mobile nav link was followed. Always closed.
    pub fn after_link(self) -> Self {
        NavState::Closed
    }

    pub fn icon(self) -> MenuIcon {
        match self {
            NavState::Open => MenuIcon::Close,
            NavState::Closed => MenuIcon::Menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

impl MenuIcon {
    /// Inner markup for the trigger button's `<svg>`.
    pub fn markup(self) -> &'static str {
        match self {
            MenuIcon::Menu => concat!(
                r#"<line x1="4" x2="20" y1="12" y2="12"></line>"#,
                r#"<line x1="4" x2="20" y1="6" y2="6"></line>"#,
                r#"<line x1="4" x2="20" y1="18" y2="18"></line>"#,
            ),
            MenuIcon::Close => r#"<path d="m6 6 12 12M6 18 18 6"></path>"#,
        }
    }
}

/// Decides whether a navigation link should carry the `active` class for
/// the current document path.
///
/// Matches on the exact path, on the site root, or when the path contains a
/// non-root href. Several links can match at once and all of them are
/// highlighted. A missing href is compared as the string `"null"`, which is
/// how the markup-side script always treated it.
pub fn is_active_link(path: &str, href: Option<&str>) -> bool {
    let Some(href) = href else {
        return path.contains("null");
    };
    path == href || (path == "/" && href == "/") || (href != "/" && path.contains(href))
}

fn render_icon(button: &Element, icon: MenuIcon) {
    if let Ok(Some(svg)) = button.query_selector("svg") {
        svg.set_inner_html(icon.markup());
    }
}

pub fn setup_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let (Some(button), Some(panel)) = (
        dom::query(document, MENU_BUTTON)?,
        dom::query(document, MOBILE_NAV)?,
    ) else {
        debug!("No mobile menu on this page");
        return Ok(());
    };

    {
        let button_el = button.clone();
        let panel = panel.clone();
        dom::listen(&button, "click", move |_| {
            // toggle() reports the class presence after the flip
            let Ok(open) = panel.class_list().toggle(OPEN_CLASS) else {
                return;
            };
            render_icon(&button_el, NavState::from_open(open).icon());
        })?;
    }

    let links = dom::query_all(document, MOBILE_NAV_LINK)?;
    for link in &links {
        let button = button.clone();
        let panel = panel.clone();
        dom::listen(link, "click", move |_| {
            let prior = NavState::from_open(panel.class_list().contains(OPEN_CLASS));
            let state = prior.after_link();
            let _ = panel.class_list().remove_1(OPEN_CLASS);
            render_icon(&button, state.icon());
            debug!("Mobile nav link followed, panel was {:?}", prior);
        })?;
    }

    info!("Mobile menu wired with {} links", links.len());
    Ok(())
}

pub fn highlight_active_links(window: &Window, document: &Document) -> Result<(), JsValue> {
    let path = window.location().pathname()?;
    let mut active = 0;
    for link in dom::query_all(document, HIGHLIGHTED_LINKS)? {
        let classes = link.class_list();
        classes.remove_1(ACTIVE_CLASS)?;
        if is_active_link(&path, link.get_attribute("href").as_deref()) {
            classes.add_1(ACTIVE_CLASS)?;
            active += 1;
        }
    }
    info!("Highlighted {} navigation links for {}", active, path);
    Ok(())
}
