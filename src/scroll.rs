use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{HEADER_SCROLL_THRESHOLD, PARALLAX_SPEED, SCROLL_TOP_THRESHOLD};
use crate::dom;

const HEADER: &str = ".header";
const HERO_BG: &str = ".hero-bg";
const SCROLLED_CLASS: &str = "scrolled";

const SCROLL_TOP_CLASS: &str = "scroll-to-top";
const SCROLL_TOP_LABEL: &str = "↑";
const SCROLL_TOP_STYLE: &str = "\
    position: fixed; \
    bottom: 2rem; \
    right: 2rem; \
    background: var(--gradient-primary); \
    color: white; \
    border: none; \
    border-radius: 50%; \
    width: 3rem; \
    height: 3rem; \
    font-size: 1.5rem; \
    cursor: pointer; \
    opacity: 0; \
    transition: opacity 0.3s ease; \
    z-index: 100; \
    box-shadow: var(--shadow-glow);";

pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

pub fn scroll_top_opacity(offset: f64) -> &'static str {
    if offset > SCROLL_TOP_THRESHOLD {
        "1"
    } else {
        "0"
    }
}

pub fn parallax_offset(offset: f64) -> f64 {
    -(offset * PARALLAX_SPEED)
}

pub fn parallax_transform(offset: f64) -> String {
    let y = parallax_offset(offset);
    // keep "-0px" out of the style attribute at the top of the page
    let y = if y == 0.0 { 0.0 } else { y };
    format!("translateY({}px)", y)
}

/// Single-slot guard for frame-deferred work. The first `try_acquire` wins
/// and every later one fails until the scheduled work calls `release`.
#[derive(Debug, Default)]
pub struct FrameLatch {
    pending: Cell<bool>,
}

impl FrameLatch {
    pub fn try_acquire(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn setup_header(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(header) = dom::query(document, HEADER)? else {
        debug!("No header on this page");
        return Ok(());
    };

    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let classes = header.class_list();
        let _ = if header_scrolled(scroll_offset(&win)) {
            classes.add_1(SCROLLED_CLASS)
        } else {
            classes.remove_1(SCROLLED_CLASS)
        };
    })?;

    info!("Header scroll state wired");
    Ok(())
}

pub fn setup_scroll_to_top(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let button = document
        .create_element("button")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("button is not an HTML element"))?;
    button.set_inner_html(SCROLL_TOP_LABEL);
    button.set_class_name(SCROLL_TOP_CLASS);
    button.set_attribute("style", SCROLL_TOP_STYLE)?;
    body.append_child(&button)?;

    {
        let win = window.clone();
        dom::listen(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let _ = dom::set_style(&button, "opacity", scroll_top_opacity(scroll_offset(&win)));
    })?;

    info!("Scroll-to-top control added");
    Ok(())
}

/// Moves every `.hero-bg` at half the scroll speed. Scroll events arriving
/// while a frame is already requested are dropped.
pub fn setup_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let latch = Rc::new(FrameLatch::default());

    let frame = {
        let latch = latch.clone();
        let win = window.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let offset = win.page_y_offset().unwrap_or(0.0);
            let transform = parallax_transform(offset);
            if let Ok(elements) = dom::query_all(&document, HERO_BG) {
                for el in &elements {
                    let _ = dom::set_style(el, "transform", &transform);
                }
            }
            latch.release();
        }) as Box<dyn FnMut()>)
    };

    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        if !latch.try_acquire() {
            return;
        }
        if win.request_animation_frame(frame.as_ref().unchecked_ref()).is_err() {
            latch.release();
        }
    })?;

    info!("Parallax wired");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(20.0));
        assert!(header_scrolled(20.5));
        assert!(header_scrolled(400.0));
    }

    #[test]
    fn scroll_top_control_visibility() {
        assert_eq!(scroll_top_opacity(0.0), "0");
        assert_eq!(scroll_top_opacity(300.0), "0");
        assert_eq!(scroll_top_opacity(301.0), "1");
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(100.0), -50.0);
        assert_eq!(parallax_offset(333.0), -166.5);
        assert_eq!(parallax_transform(100.0), "translateY(-50px)");
        assert_eq!(parallax_transform(0.0), "translateY(0px)");
        assert_eq!(parallax_transform(25.0), "translateY(-12.5px)");
    }

    #[test]
    fn latch_coalesces_until_released() {
        let latch = FrameLatch::default();
        let scheduled = (0..5).filter(|_| latch.try_acquire()).count();
        assert_eq!(scheduled, 1);
        assert!(latch.is_pending());

        latch.release();
        assert!(!latch.is_pending());
        assert!(latch.try_acquire());
        assert!(!latch.try_acquire());
    }

    #[test]
    fn one_frame_runs_per_burst_of_scroll_events() {
        let latch = FrameLatch::default();
        let mut frames_run = 0;
        for burst in [3, 1, 7] {
            let mut queued = None;
            for offset in 0..burst {
                if latch.try_acquire() {
                    queued = Some(offset as f64);
                }
            }
            // frame callback
            if let Some(offset) = queued {
                let _ = parallax_offset(offset);
                frames_run += 1;
                latch.release();
            }
        }
        assert_eq!(frames_run, 3);
    }
}
