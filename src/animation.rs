use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION, STAGGER_STEP_DIVISOR,
};
use crate::dom;

const REVEAL_TARGETS: &str = ".animate-fade-up, .animate-slide-right, .animate-scale-in";
const STAGGER_TARGETS: &str = r#"[class*="stagger-"]"#;
const STAGGER_PREFIX: &str = "stagger-";

const HIDDEN_OPACITY: &str = "0";
const VISIBLE_OPACITY: &str = "1";
const VISIBLE_TRANSFORM: &str = "translateY(0) translateX(0) scale(1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeUp,
    SlideRight,
    ScaleIn,
}

impl AnimationKind {
    /// Checked in this order when an element carries more than one marker.
    pub const ALL: [AnimationKind; 3] = [
        AnimationKind::FadeUp,
        AnimationKind::SlideRight,
        AnimationKind::ScaleIn,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "animate-fade-up",
            AnimationKind::SlideRight => "animate-slide-right",
            AnimationKind::ScaleIn => "animate-scale-in",
        }
    }

    pub fn hidden_transform(self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "translateY(30px)",
            AnimationKind::SlideRight => "translateX(50px)",
            AnimationKind::ScaleIn => "scale(0.95)",
        }
    }

    pub fn from_classes<S: AsRef<str>>(classes: &[S]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| classes.iter().any(|c| c.as_ref() == kind.class_name()))
    }
}

/// Leading integer of `text` the way a browser's `parseInt` reads it:
/// surrounding junk after the digits is ignored and a `0x` prefix switches
/// to hex. `None` when no digit is found.
fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let value = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(None, |acc: Option<f64>, d| {
            Some(acc.unwrap_or(0.0) * f64::from(radix) + f64::from(d))
        })?;
    Some(sign * value)
}

/// Animation delay in seconds for an element's classes.
///
/// The first `stagger-` class in DOM order decides, even when a later one
/// would parse; its step is the segment up to the next `-`.
pub fn stagger_delay<S: AsRef<str>>(classes: &[S]) -> Option<f64> {
    let class = classes
        .iter()
        .map(AsRef::as_ref)
        .find(|c| c.starts_with(STAGGER_PREFIX))?;
    let step = class.split('-').nth(1)?;
    leading_integer(step).map(|n| n / STAGGER_STEP_DIVISOR)
}

pub fn format_delay(seconds: f64) -> String {
    format!("{}s", seconds)
}

fn hide(el: &HtmlElement, kind: Option<AnimationKind>) -> Result<(), JsValue> {
    dom::set_style(el, "opacity", HIDDEN_OPACITY)?;
    if let Some(kind) = kind {
        dom::set_style(el, "transform", kind.hidden_transform())?;
    }
    dom::set_style(el, "transition", REVEAL_TRANSITION)
}

fn reveal(el: &HtmlElement) {
    let _ = dom::set_style(el, "opacity", VISIBLE_OPACITY);
    let _ = dom::set_style(el, "transform", VISIBLE_TRANSFORM);
}

/// Hides every animation target and reveals it once it scrolls into view.
/// Targets stay observed; revealing an already visible element is a no-op.
pub fn setup_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = dom::query_all(document, REVEAL_TARGETS)?;
    if targets.is_empty() {
        debug!("No animated elements on this page");
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                reveal(&el);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &targets {
        hide(el, AnimationKind::from_classes(&dom::class_names(el)))?;
        observer.observe(el);
    }

    info!("Observing {} animated elements", targets.len());
    Ok(())
}

pub fn setup_stagger(document: &Document) -> Result<(), JsValue> {
    let mut applied = 0;
    for el in dom::query_all(document, STAGGER_TARGETS)? {
        match stagger_delay(&dom::class_names(&el)) {
            Some(delay) => {
                dom::set_style(&el, "animation-delay", &format_delay(delay))?;
                applied += 1;
            }
            None => debug!("Unparseable stagger class on {:?}", el.class_name()),
        }
    }
    if applied > 0 {
        info!("Applied stagger delays to {} elements", applied);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_three_is_three_tenths() {
        let delay = stagger_delay(&["card", "stagger-3"]).unwrap();
        assert_eq!(delay, 0.3);
        assert_eq!(format_delay(delay), "0.3s");
    }

    #[test]
    fn stagger_steps() {
        assert_eq!(stagger_delay(&["stagger-0"]), Some(0.0));
        assert_eq!(stagger_delay(&["stagger-1"]), Some(0.1));
        assert_eq!(stagger_delay(&["stagger-12"]), Some(1.2));
        assert_eq!(stagger_delay(&["stagger-4px"]), Some(0.4));
        assert_eq!(stagger_delay(&["stagger-5-fast"]), Some(0.5));
        assert_eq!(stagger_delay(&["stagger-0x2"]), Some(0.2));
    }

    #[test]
    fn first_stagger_class_wins() {
        assert_eq!(stagger_delay(&["stagger-2", "stagger-5"]), Some(0.2));
        assert_eq!(stagger_delay(&["stagger-x", "stagger-5"]), None);
    }

    #[test]
    fn stagger_needs_a_prefix_class_and_digits() {
        assert_eq!(stagger_delay(&["card", "no-stagger-3"]), None);
        assert_eq!(stagger_delay(&["stagger-"]), None);
        assert_eq!(stagger_delay::<&str>(&[]), None);
    }

    #[test]
    fn leading_integer_follows_parse_int() {
        assert_eq!(leading_integer("42abc"), Some(42.0));
        assert_eq!(leading_integer("+7"), Some(7.0));
        assert_eq!(leading_integer("-7"), Some(-7.0));
        assert_eq!(leading_integer("0xff"), Some(255.0));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn animation_kind_from_classes() {
        assert_eq!(
            AnimationKind::from_classes(&["section", "animate-slide-right"]),
            Some(AnimationKind::SlideRight)
        );
        assert_eq!(AnimationKind::from_classes(&["section"]), None);
    }

    #[test]
    fn fade_up_takes_priority_over_other_markers() {
        let classes = ["animate-scale-in", "animate-fade-up"];
        assert_eq!(
            AnimationKind::from_classes(&classes),
            Some(AnimationKind::FadeUp)
        );
    }

    #[test]
    fn hidden_transforms() {
        assert_eq!(AnimationKind::FadeUp.hidden_transform(), "translateY(30px)");
        assert_eq!(AnimationKind::SlideRight.hidden_transform(), "translateX(50px)");
        assert_eq!(AnimationKind::ScaleIn.hidden_transform(), "scale(0.95)");
    }
}
